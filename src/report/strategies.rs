//! Static sales-strategy content (the educational tabs).
//!
//! This content is fixed copy, not data: it ships with the binary rather
//! than with the JSON documents, exactly like the section prose it sits in.

use clap::ValueEnum;

/// The four strategy tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum StrategyTab {
    Communication,
    Trust,
    Objections,
    Closing,
}

impl StrategyTab {
    pub const ALL: [StrategyTab; 4] = [
        StrategyTab::Communication,
        StrategyTab::Trust,
        StrategyTab::Objections,
        StrategyTab::Closing,
    ];

    pub fn title(self) -> &'static str {
        match self {
            StrategyTab::Communication => "Communication Techniques",
            StrategyTab::Trust => "Building Trust",
            StrategyTab::Objections => "Handling Objections",
            StrategyTab::Closing => "Closing Techniques",
        }
    }

    pub fn body(self) -> &'static str {
        match self {
            StrategyTab::Communication => COMMUNICATION,
            StrategyTab::Trust => TRUST,
            StrategyTab::Objections => OBJECTIONS,
            StrategyTab::Closing => CLOSING,
        }
    }

    pub fn next(self) -> StrategyTab {
        match self {
            StrategyTab::Communication => StrategyTab::Trust,
            StrategyTab::Trust => StrategyTab::Objections,
            StrategyTab::Objections => StrategyTab::Closing,
            StrategyTab::Closing => StrategyTab::Communication,
        }
    }

    pub fn prev(self) -> StrategyTab {
        match self {
            StrategyTab::Communication => StrategyTab::Closing,
            StrategyTab::Trust => StrategyTab::Communication,
            StrategyTab::Objections => StrategyTab::Trust,
            StrategyTab::Closing => StrategyTab::Objections,
        }
    }
}

/// Format one tab as a titled plain-text block.
pub fn format_strategy(tab: StrategyTab) -> String {
    let title = tab.title();
    format!("{title}\n{}\n{}\n", "=".repeat(title.len()), tab.body())
}

const COMMUNICATION: &str = "\
Active listening
  The foundation of effective sales communication is active listening.
  Pay attention to verbal and non-verbal cues.
  - Maintain eye contact and open body language
  - Ask clarifying questions to understand needs
  - Summarize and confirm understanding
  - Avoid interrupting the customer

Matching communication styles
  Adapt your style to the customer's personality type for better rapport.
  - Analytical: use data, facts, and detailed explanations
  - Driver: be direct, concise, and results-focused
  - Amiable: build personal connection, be patient
  - Expressive: show enthusiasm, use stories";

const TRUST: &str = "\
Transparency & honesty
  Trust is built on transparency. Be upfront about pricing, features,
  and any limitations.
  - Provide clear, upfront pricing information
  - Acknowledge product limitations honestly
  - Share real customer testimonials
  - Follow through on all promises

Creating safety & comfort
  Make customers feel safe and comfortable throughout the buying process.
  - Respect personal space and boundaries
  - Offer guarantees and warranties
  - Provide time to think without pressure
  - Share your expertise without condescension";

const OBJECTIONS: &str = "\
Common objections & responses
  \"It's too expensive\"
    Focus on value and ROI. Break down the cost over time and highlight
    long-term savings.
  \"I need to think about it\"
    Respect their process. Offer to address specific concerns and
    schedule a follow-up.
  \"I'm just looking\"
    Engage without pressure. Offer helpful information and make yourself
    available for questions.

The LAER method
  - Listen: let them fully express their concern
  - Acknowledge: show you understand their perspective
  - Explore: ask questions to understand the root cause
  - Respond: address the specific concern with relevant information";

const CLOSING: &str = "\
Closing strategies by type
  - Analytical: summary close - review all data points and ask for
    confirmation
  - Driver: direct close - \"Are you ready to move forward today?\"
  - Amiable: comfort close - reassure and ask how they feel about
    proceeding
  - Expressive: enthusiasm close - match their excitement and ask for
    commitment

Timing the close
  Recognize buying signals and time your close appropriately:
  - Customer asks about delivery or availability
  - Discussion shifts to payment options
  - Customer uses ownership language (\"my car\")
  - Body language becomes more relaxed and open";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tab_has_title_and_body() {
        for tab in StrategyTab::ALL {
            assert!(!tab.title().is_empty());
            assert!(!tab.body().is_empty());
        }
    }

    #[test]
    fn next_and_prev_cycle_through_all_tabs() {
        let mut tab = StrategyTab::Communication;
        for _ in 0..4 {
            tab = tab.next();
        }
        assert_eq!(tab, StrategyTab::Communication);
        assert_eq!(StrategyTab::Communication.prev(), StrategyTab::Closing);
    }

    #[test]
    fn formatted_tab_is_underlined() {
        let text = format_strategy(StrategyTab::Trust);
        assert!(text.starts_with("Building Trust\n=============="));
    }
}
