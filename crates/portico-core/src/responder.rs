//! Keyword responder over the knowledge base.
//!
//! `respond` is the local answer engine: deterministic, total, and pure.
//! It lowercases the input, walks an ordered list of intent predicates, and
//! returns the first match's formatted answer. The predicate order is part
//! of the contract -- an input containing several keywords resolves to
//! whichever predicate is tested first -- so new predicates must be added
//! at the end, never inserted.

use portico_types::knowledge::{KnowledgeBase, ServiceOffering};

/// Greeting shown when a chat session opens.
pub fn welcome() -> String {
    "Hello! I'm your portfolio assistant. I can help you learn about:\n\n\
     \u{2022} Services offered\n\
     \u{2022} Skills and expertise\n\
     \u{2022} Portfolio projects\n\
     \u{2022} Contact information\n\
     \u{2022} Experience and background\n\n\
     What would you like to know?"
        .to_string()
}

/// Answer a free-text question from the knowledge base.
///
/// Never fails and always returns a non-empty string; unrecognized input
/// gets the fixed topic list.
pub fn respond(text: &str, kb: &KnowledgeBase) -> String {
    let input = text.to_lowercase();

    if contains_any(&input, &["service", "what do you offer", "what can you do"]) {
        return service_list_answer(kb);
    }

    if let Some(service) = match_specific_service(&input, kb) {
        return format!("{}:\n{}", service.name, service.description);
    }

    if contains_any(&input, &["contact", "email", "phone", "address"]) {
        return format!(
            "Contact Information:\n\n\
             \u{1F4E7} Email: {}\n\
             \u{1F4F1} Phone: {}\n\
             \u{1F4CD} Address: {}\n\n\
             I'm available for freelance work!",
            kb.about.email, kb.about.phone, kb.about.address
        );
    }

    if contains_any(&input, &["about", "who are you", "introduce"]) {
        return format!(
            "About {}:\n\n{}\n\nI'm {} years old, based in {}, and currently {} for \
             freelance projects.",
            kb.about.name,
            kb.about.description,
            kb.about.age,
            kb.about.city,
            kb.about.freelance.to_lowercase()
        );
    }

    if contains_any(&input, &["skill", "expertise", "what are you good at"]) {
        let categories = kb
            .skills
            .iter()
            .map(|category| format!("{}:\n{}", category.label, category.items.join(", ")))
            .collect::<Vec<_>>()
            .join("\n\n");
        return format!("My Skills:\n\n{categories}");
    }

    if contains_any(&input, &["portfolio", "project", "work"]) {
        return format!(
            "Portfolio Projects:\n\n{}\n\nYou can view these projects in the Portfolio \
             section of the website. Each project showcases different styles and visual \
             fields.",
            kb.portfolio.join(", ")
        );
    }

    if contains_any(&input, &["price", "cost", "rate", "how much"]) {
        return format!(
            "For pricing information, please contact me directly at {} or {}. I'd be happy \
             to discuss your project requirements and provide a customized quote.",
            kb.about.email, kb.about.phone
        );
    }

    if contains_any(&input, &["experience", "work history", "background"]) {
        let mut answer = String::from("Professional Experience:\n\n");
        for entry in &kb.experience {
            answer.push_str(&format!(
                "\u{1F3E2} {}\n   Period: {}\n   Location: {}\n   Role: {}\n\n",
                entry.company, entry.period, entry.location, entry.role
            ));
        }
        return answer;
    }

    default_answer()
}

/// The fixed fallback listing available topics.
fn default_answer() -> String {
    "I can help you with information about:\n\n\
     \u{2022} Services offered\n\
     \u{2022} Skills and expertise\n\
     \u{2022} Portfolio projects\n\
     \u{2022} Contact information\n\
     \u{2022} Experience\n\n\
     Could you be more specific about what you'd like to know?"
        .to_string()
}

fn service_list_answer(kb: &KnowledgeBase) -> String {
    let mut answer = String::from("I offer the following services:\n\n");
    for (index, service) in kb.services.iter().enumerate() {
        answer.push_str(&format!(
            "{}. {}\n   {}\n\n",
            index + 1,
            service.name,
            service.description
        ));
    }
    answer
}

/// Find the first service whose name matches the input.
///
/// Only the first and second words of each name are tested, as substrings
/// of the already-lowercased input. Ties break in knowledge-base order.
fn match_specific_service<'a>(input: &str, kb: &'a KnowledgeBase) -> Option<&'a ServiceOffering> {
    kb.services.iter().find(|service| {
        service
            .name
            .to_lowercase()
            .split_whitespace()
            .take(2)
            .any(|word| input.contains(word))
    })
}

fn contains_any(input: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| input.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kb() -> KnowledgeBase {
        KnowledgeBase::builtin()
    }

    #[test]
    fn service_question_enumerates_all_services() {
        let answer = respond("What services do you offer?", &kb());
        assert!(answer.starts_with(
            "I offer the following services:\n\n1. Brand Identity & Logo Design\n   I personally develop"
        ));
        for index in 1..=6 {
            assert!(answer.contains(&format!("{index}. ")), "missing entry {index}");
        }
    }

    #[test]
    fn service_list_wins_over_pricing() {
        // Predicate order: the service-list predicate is tested first, so a
        // message with both keywords gets the service list.
        let answer = respond("service pricing", &kb());
        assert!(answer.starts_with("I offer the following services:"));
    }

    #[test]
    fn specific_service_matches_on_name_word() {
        let answer = respond("do you make motion titles?", &kb());
        assert!(answer.starts_with("Motion Graphics & Animation:\n"));
    }

    #[test]
    fn specific_service_ties_break_in_kb_order() {
        // "design" appears in two service names; the earliest service whose
        // first two words match wins.
        let answer = respond("I need a design", &kb());
        assert!(answer.starts_with("Graphic Design for Marketing Collateral:\n"));
    }

    #[test]
    fn only_first_two_name_words_are_tested() {
        // "Photography & Image Retouching" exposes only "photography" and
        // "&" to the matcher, so a bare ampersand in the input matches it.
        let answer = respond("tom & jerry", &kb());
        assert!(answer.starts_with("Photography & Image Retouching:\n"));

        // "retouching" is the fourth word of that name and is never tested.
        let answer = respond("retouching", &kb());
        assert!(answer.starts_with("I can help you with information about:"));
    }

    #[test]
    fn contact_question_includes_email_and_phone() {
        let snapshot = kb();
        let answer = respond("How can I contact you?", &snapshot);
        assert!(answer.contains(&snapshot.about.email));
        assert!(answer.contains(&snapshot.about.phone));
        assert!(answer.starts_with("Contact Information:"));
    }

    #[test]
    fn about_question_uses_profile() {
        let answer = respond("tell me about yourself", &kb());
        assert!(answer.starts_with("About Sebai Houssem:"));
        assert!(answer.contains("24 years old"));
        assert!(answer.contains("currently available for freelance projects"));
    }

    #[test]
    fn skills_question_lists_every_category() {
        let snapshot = kb();
        let answer = respond("what are your skills?", &snapshot);
        assert!(answer.starts_with("My Skills:"));
        for category in &snapshot.skills {
            assert!(answer.contains(&category.label));
        }
    }

    #[test]
    fn portfolio_question_lists_projects() {
        let answer = respond("show me your portfolio", &kb());
        assert!(answer.starts_with("Portfolio Projects:"));
        assert!(answer.contains("Moly Night Bar"));
    }

    #[test]
    fn work_history_resolves_to_portfolio_not_experience() {
        // "work history" contains "work", and the portfolio predicate is
        // tested before the experience predicate.
        let answer = respond("work history", &kb());
        assert!(answer.starts_with("Portfolio Projects:"));
    }

    #[test]
    fn pricing_question_points_at_contact_details() {
        let snapshot = kb();
        let answer = respond("how much does it cost?", &snapshot);
        assert!(answer.contains(&snapshot.about.email));
        assert!(answer.contains("customized quote"));
    }

    #[test]
    fn experience_question_lists_companies() {
        let answer = respond("what is your background?", &kb());
        assert!(answer.starts_with("Professional Experience:"));
        assert!(answer.contains("CJ Studio"));
        assert!(answer.contains("Asnopub"));
        assert!(answer.contains("Travel Center"));
    }

    #[test]
    fn unrecognized_input_gets_topic_list() {
        let answer = respond("zzzzz", &kb());
        assert!(answer.starts_with("I can help you with information about:"));
    }

    #[test]
    fn respond_is_total_on_empty_and_odd_input() {
        for input in ["", "   ", "\n", "🤷", "SELECT * FROM users;"] {
            let answer = respond(input, &kb());
            assert!(!answer.is_empty(), "empty answer for {input:?}");
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        let answer = respond("WHAT SERVICES DO YOU OFFER", &kb());
        assert!(answer.starts_with("I offer the following services:"));
    }

    #[test]
    fn welcome_lists_topics() {
        let greeting = welcome();
        assert!(greeting.contains("Services offered"));
        assert!(greeting.contains("Experience and background"));
    }
}
