//! Plain-text formatting of catalog cards and classification reports.

use crate::domain::{ClassificationResult, CustomerType, TypeCatalog, TypeScore};

/// Format the full catalog as a sequence of cards.
pub fn format_catalog(catalog: &TypeCatalog) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== Customer Types ({}) ===\n\n", catalog.len()));
    for (i, t) in catalog.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format_type_card(t));
    }
    out
}

/// Format one customer type as a full card.
pub fn format_type_card(t: &CustomerType) -> String {
    let mut out = String::new();

    out.push_str(&format!("{} {} [{}]\n", t.icon, t.name, t.id));

    out.push_str("Characteristics:\n");
    push_bullets(&mut out, &t.characteristics);

    out.push_str("Personality traits:\n");
    push_bullets(&mut out, &t.traits);

    out.push_str("Primary motivations:\n");
    push_bullets(&mut out, &t.primary_motivations);

    out.push_str(&format!("Communication style: {}\n", t.communication_style));
    out.push_str(&format!("Decision timeline:   {}\n", t.decision_time));

    out.push_str("Engagement tips:\n");
    push_bullets(&mut out, &t.engagement_tips);

    out
}

/// Format a classification result: winner card + score table.
pub fn format_result(result: &ClassificationResult) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Your result: {} {}\n\n",
        result.primary.icon, result.primary.name
    ));
    out.push_str(&format_type_card(&result.primary));
    out.push('\n');
    out.push_str("Answer breakdown:\n");
    out.push_str(&format_scores(&result.scores));

    out
}

/// Format the score tally as an aligned table with share percentages.
pub fn format_scores(scores: &[TypeScore]) -> String {
    let total: usize = scores.iter().map(|s| s.count).sum();
    let tag_width = scores.iter().map(|s| s.tag.len()).max().unwrap_or(4).max(4);

    let mut out = String::new();
    for score in scores {
        let share = if total == 0 {
            0.0
        } else {
            100.0 * score.count as f64 / total as f64
        };
        out.push_str(&format!(
            "  {:<tag_width$}  {:>3}  {:>5.1}%  {}\n",
            score.tag,
            score.count,
            share,
            "#".repeat(score.count),
        ));
    }
    out
}

fn push_bullets(out: &mut String, items: &[String]) {
    for item in items {
        out.push_str(&format!("  - {item}\n"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_type() -> CustomerType {
        CustomerType {
            id: "analytical".to_string(),
            name: "The Analytical Buyer".to_string(),
            icon: "#".to_string(),
            color: "blue".to_string(),
            characteristics: vec!["Data driven".to_string()],
            traits: vec!["Methodical".to_string()],
            primary_motivations: vec!["Accuracy".to_string()],
            communication_style: "Facts first.".to_string(),
            decision_time: "Slow and deliberate.".to_string(),
            engagement_tips: vec!["Bring spec sheets".to_string()],
        }
    }

    #[test]
    fn type_card_includes_every_section() {
        let card = format_type_card(&sample_type());
        assert!(card.contains("The Analytical Buyer [analytical]"));
        assert!(card.contains("- Data driven"));
        assert!(card.contains("Communication style: Facts first."));
        assert!(card.contains("- Bring spec sheets"));
    }

    #[test]
    fn score_table_shows_counts_and_shares() {
        let scores = vec![
            TypeScore {
                tag: "driver".to_string(),
                count: 3,
            },
            TypeScore {
                tag: "amiable".to_string(),
                count: 1,
            },
        ];

        let table = format_scores(&scores);
        assert!(table.contains("driver"));
        assert!(table.contains("75.0%"));
        assert!(table.contains("###"));
        assert!(table.contains("25.0%"));
    }

    #[test]
    fn result_report_leads_with_the_winner() {
        let result = ClassificationResult {
            primary: sample_type(),
            scores: vec![TypeScore {
                tag: "analytical".to_string(),
                count: 2,
            }],
        };

        let report = format_result(&result);
        assert!(report.starts_with("Your result: # The Analytical Buyer"));
        assert!(report.contains("Answer breakdown:"));
    }
}
