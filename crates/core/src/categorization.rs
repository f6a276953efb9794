//! Skill categorization: default taxonomy and classifier output selection.

use crate::error::CoreError;

/// Categories seeded when the taxonomy table is empty.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Programming",
    "Design",
    "Business",
    "Marketing",
    "Data Science",
    "Personal Development",
];

pub const MAX_CATEGORY_NAME_LEN: usize = 100;

/// Description stored for a seeded category.
pub fn default_description(name: &str) -> String {
    format!("Skills related to {name}")
}

/// Text classified for a skill.
pub fn categorization_text(name: &str, description: &str) -> String {
    format!("{name} {description}")
}

pub fn validate_category_name(name: &str) -> Result<(), CoreError> {
    crate::skill::validate_text_len("category name", name, MAX_CATEGORY_NAME_LEN)
}

/// Pick the highest-scoring label from parallel `labels` / `scores` lists.
///
/// Returns `None` when the lists are empty or of different lengths.
pub fn top_label(labels: &[String], scores: &[f64]) -> Option<(String, f64)> {
    if labels.is_empty() || labels.len() != scores.len() {
        return None;
    }
    labels
        .iter()
        .zip(scores)
        .fold(None::<(&String, f64)>, |best, (label, &score)| match best {
            Some((_, best_score)) if best_score >= score => best,
            _ => Some((label, score)),
        })
        .map(|(label, score)| (label.clone(), score))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_defaults() {
        assert_eq!(DEFAULT_CATEGORIES.len(), 6);
        assert_eq!(default_description("Design"), "Skills related to Design");
    }

    #[test]
    fn top_label_picks_highest_score() {
        let labels = vec!["Design".to_string(), "Programming".to_string()];
        let (label, score) = top_label(&labels, &[0.2, 0.8]).unwrap();
        assert_eq!(label, "Programming");
        assert_eq!(score, 0.8);
    }

    #[test]
    fn top_label_keeps_first_on_tie() {
        let labels = vec!["A".to_string(), "B".to_string()];
        assert_eq!(top_label(&labels, &[0.5, 0.5]).unwrap().0, "A");
    }

    #[test]
    fn top_label_rejects_bad_shapes() {
        assert!(top_label(&[], &[]).is_none());
        assert!(top_label(&["A".to_string()], &[]).is_none());
    }
}
