//! Librarian persona instructions per request kind.

use super::request::RequestKind;

/// Separator placed between the instruction and the reader's input.
pub const INPUT_SEPARATOR: &str = "\n\n入力内容: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindDirective {
    pub instruction: &'static str,
    /// Ask the model for syntactically valid JSON instead of prose
    pub structured_output: bool,
}

const TASK: KindDirective = KindDirective {
    instruction: "あなたは古今東西の知恵に精通した知的な司書です。読者の感想から、明日からすぐ始められる『実践の種』を3つ提案してください。
必ず以下のJSON形式でのみ返却してください。余計な解説は不要です。
{\"actions\":[\"行動1\", \"行動2\", \"行動3\"]}",
    structured_output: true,
};

const PRAISE: KindDirective = KindDirective {
    instruction: "あなたは慈愛に満ちた司書です。読者が本を読み終えたことを心から祝福し、感想に深く共感してください。150文字程度で、温かい言葉を贈ってください。",
    structured_output: false,
};

const PROPHECY: KindDirective = KindDirective {
    instruction: "あなたは神秘的な司書です。読者の行動が将来どのような変化をもたらすか、比喩や詩的な表現を用いて1文で予言してください。",
    structured_output: false,
};

const FALLBACK: KindDirective = KindDirective {
    instruction: "あなたは温厚な司書です。読者を優しく励ましてください。",
    structured_output: false,
};

impl KindDirective {
    /// Directive for a generation request. `Search` never reaches generation;
    /// it shares the fallback like any unrecognized kind.
    pub fn for_kind(kind: RequestKind) -> Self {
        match kind {
            RequestKind::Task => TASK,
            RequestKind::Praise => PRAISE,
            RequestKind::Prophecy => PROPHECY,
            RequestKind::Search | RequestKind::Other => FALLBACK,
        }
    }

    pub fn build_prompt(&self, input: &str) -> String {
        format!("{}{}{}", self.instruction, INPUT_SEPARATOR, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_task_requests_structured_output() {
        assert!(KindDirective::for_kind(RequestKind::Task).structured_output);
        assert!(!KindDirective::for_kind(RequestKind::Praise).structured_output);
        assert!(!KindDirective::for_kind(RequestKind::Prophecy).structured_output);
        assert!(!KindDirective::for_kind(RequestKind::Other).structured_output);
    }

    #[test]
    fn unknown_kind_uses_fallback() {
        assert_eq!(KindDirective::for_kind(RequestKind::Other), FALLBACK);
    }

    #[test]
    fn prompt_appends_input_after_separator() {
        let prompt = KindDirective::for_kind(RequestKind::Praise).build_prompt("こころ");
        assert!(prompt.starts_with(PRAISE.instruction));
        assert!(prompt.ends_with("\n\n入力内容: こころ"));
    }

    #[test]
    fn task_instruction_names_the_json_shape() {
        assert!(TASK.instruction.contains("{\"actions\":["));
    }
}
