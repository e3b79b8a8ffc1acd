//! Verdict prompt construction

use verifact_domain::Message;

/// Fixed system instruction for the verdict stage.
pub const VERDICT_INSTRUCTION: &str = "You are a fact-checking assistant. \
Always use the provided evidence to judge the claim. Respond with a verdict: \
TRUE, FALSE, or PARTIALLY TRUE, followed by a detailed explanation citing the \
evidence.";

/// Build the two-message verdict prompt: the fixed system instruction plus a
/// user message carrying the claim and the evidence text verbatim.
pub fn build_verdict_prompt(claim: &str, evidence: &str) -> Vec<Message> {
    vec![
        Message::system(VERDICT_INSTRUCTION),
        Message::user(format!("Claim: {}\n\nEvidence:\n{}", claim, evidence)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use verifact_domain::Role;

    #[test]
    fn test_prompt_shape() {
        let prompt = build_verdict_prompt("The sky is green", "The sky is blue.");
        assert_eq!(prompt.len(), 2);
        assert_eq!(prompt[0].role, Role::System);
        assert_eq!(prompt[1].role, Role::User);
    }

    #[test]
    fn test_prompt_carries_claim_and_evidence_verbatim() {
        let prompt = build_verdict_prompt("E = mc^2", "Einstein, 1905.");
        assert_eq!(prompt[1].content, "Claim: E = mc^2\n\nEvidence:\nEinstein, 1905.");
    }

    #[test]
    fn test_instruction_names_the_verdict_labels() {
        assert!(VERDICT_INSTRUCTION.contains("TRUE"));
        assert!(VERDICT_INSTRUCTION.contains("FALSE"));
        assert!(VERDICT_INSTRUCTION.contains("PARTIALLY TRUE"));
    }

    #[test]
    fn test_prompt_with_empty_evidence() {
        let prompt = build_verdict_prompt("Anything", "");
        assert_eq!(prompt[1].content, "Claim: Anything\n\nEvidence:\n");
    }
}
