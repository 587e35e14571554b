use contracts::shared::generation_parameters::GenerationParameters;

/// One editable field of [`GenerationParameters`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterField {
    Temperature,
    MaxTokens,
    TopP,
    FrequencyPenalty,
    PresencePenalty,
}

impl ParameterField {
    pub const ALL: [ParameterField; 5] = [
        ParameterField::Temperature,
        ParameterField::MaxTokens,
        ParameterField::TopP,
        ParameterField::FrequencyPenalty,
        ParameterField::PresencePenalty,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ParameterField::Temperature => "Temperature",
            ParameterField::MaxTokens => "Max tokens",
            ParameterField::TopP => "Top P",
            ParameterField::FrequencyPenalty => "Frequency penalty",
            ParameterField::PresencePenalty => "Presence penalty",
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            ParameterField::Temperature => "param-temperature",
            ParameterField::MaxTokens => "param-max-tokens",
            ParameterField::TopP => "param-top-p",
            ParameterField::FrequencyPenalty => "param-frequency-penalty",
            ParameterField::PresencePenalty => "param-presence-penalty",
        }
    }

    pub fn step(&self) -> &'static str {
        match self {
            ParameterField::MaxTokens => "1",
            _ => "0.1",
        }
    }

    /// Current value of the field as shown in the input
    pub fn read(&self, params: &GenerationParameters) -> String {
        match self {
            ParameterField::Temperature => params.temperature.to_string(),
            ParameterField::MaxTokens => params.max_tokens.to_string(),
            ParameterField::TopP => params.top_p.to_string(),
            ParameterField::FrequencyPenalty => params.frequency_penalty.to_string(),
            ParameterField::PresencePenalty => params.presence_penalty.to_string(),
        }
    }

    /// Parse `raw` as a value for this field
    ///
    /// `None` when `raw` is not a number of the field's type. Ranges are not
    /// checked.
    pub fn parse(&self, raw: &str) -> Option<ParameterValue> {
        let raw = raw.trim();
        match self {
            ParameterField::MaxTokens => raw.parse::<i32>().ok().map(ParameterValue::Int),
            _ => raw.parse::<f64>().ok().map(ParameterValue::Float),
        }
    }

    /// Store an already parsed value into this field only
    pub fn assign(&self, params: &mut GenerationParameters, value: ParameterValue) {
        match self {
            ParameterField::MaxTokens => params.max_tokens = value.as_i32(),
            ParameterField::Temperature => params.temperature = value.as_f64(),
            ParameterField::TopP => params.top_p = value.as_f64(),
            ParameterField::FrequencyPenalty => params.frequency_penalty = value.as_f64(),
            ParameterField::PresencePenalty => params.presence_penalty = value.as_f64(),
        }
    }

    /// Parse `raw` into this field only
    ///
    /// Returns false and leaves `params` untouched when `raw` is not a number.
    pub fn apply(&self, params: &mut GenerationParameters, raw: &str) -> bool {
        match self.parse(raw) {
            Some(value) => {
                self.assign(params, value);
                true
            }
            None => false,
        }
    }
}

/// Parsed input of a [`ParameterField`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterValue {
    Int(i32),
    Float(f64),
}

impl ParameterValue {
    pub fn as_f64(self) -> f64 {
        match self {
            ParameterValue::Int(v) => f64::from(v),
            ParameterValue::Float(v) => v,
        }
    }

    pub fn as_i32(self) -> i32 {
        match self {
            ParameterValue::Int(v) => v,
            ParameterValue::Float(v) => v as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_defaults() {
        let p = GenerationParameters::default();
        assert_eq!(ParameterField::Temperature.read(&p), "0.7");
        assert_eq!(ParameterField::MaxTokens.read(&p), "1000");
        assert_eq!(ParameterField::TopP.read(&p), "1");
        assert_eq!(ParameterField::PresencePenalty.read(&p), "0");
    }

    #[test]
    fn test_apply_single_field() {
        let mut p = GenerationParameters::default();
        assert!(ParameterField::TopP.apply(&mut p, "0.9"));
        assert!(ParameterField::MaxTokens.apply(&mut p, " 2048 "));

        assert_eq!(p.top_p, 0.9);
        assert_eq!(p.max_tokens, 2048);
        assert_eq!(p.temperature, 0.7);
        assert_eq!(p.frequency_penalty, 0.0);
    }

    #[test]
    fn test_apply_out_of_range_is_stored() {
        let mut p = GenerationParameters::default();
        assert!(ParameterField::Temperature.apply(&mut p, "42"));
        assert!(ParameterField::FrequencyPenalty.apply(&mut p, "-7.5"));
        assert_eq!(p.temperature, 42.0);
        assert_eq!(p.frequency_penalty, -7.5);
    }

    #[test]
    fn test_apply_rejects_non_numbers() {
        let mut p = GenerationParameters::default();
        assert!(!ParameterField::Temperature.apply(&mut p, "hot"));
        assert!(!ParameterField::MaxTokens.apply(&mut p, "1.5"));
        assert!(!ParameterField::PresencePenalty.apply(&mut p, ""));
        assert_eq!(p, GenerationParameters::default());
    }

    #[test]
    fn test_parse_once_then_assign() {
        let value = ParameterField::TopP.parse(" 0.25 ");
        assert_eq!(value, Some(ParameterValue::Float(0.25)));
        assert_eq!(ParameterField::MaxTokens.parse("64"), Some(ParameterValue::Int(64)));
        assert_eq!(ParameterField::MaxTokens.parse("6.4"), None);

        let mut p = GenerationParameters::default();
        ParameterField::TopP.assign(&mut p, ParameterValue::Float(0.25));
        ParameterField::MaxTokens.assign(&mut p, ParameterValue::Int(64));
        assert_eq!(p.top_p, 0.25);
        assert_eq!(p.max_tokens, 64);
        assert_eq!(p.temperature, 0.7);
    }

    #[test]
    fn test_partial_decimal_input_keeps_shown_value() {
        // "1", "1." and "1.0" all store 1.0, so the shown value stays "1" and the
        // memoized input is not rewritten while the user keeps typing
        let mut p = GenerationParameters::default();
        let mut shown = Vec::new();
        for raw in ["1", "1.", "1.0"] {
            assert!(ParameterField::Temperature.apply(&mut p, raw));
            shown.push(ParameterField::Temperature.read(&p));
        }
        assert_eq!(shown, ["1", "1", "1"]);

        assert!(ParameterField::Temperature.apply(&mut p, "1.05"));
        assert_eq!(p.temperature, 1.05);
        assert_eq!(ParameterField::Temperature.read(&p), "1.05");
    }

    #[test]
    fn test_partial_zero_input_keeps_shown_value() {
        let mut p = GenerationParameters::default();
        assert!(ParameterField::PresencePenalty.apply(&mut p, "0."));
        let before = ParameterField::PresencePenalty.read(&p);
        assert!(ParameterField::PresencePenalty.apply(&mut p, "0.0"));
        assert_eq!(ParameterField::PresencePenalty.read(&p), before);

        assert!(ParameterField::PresencePenalty.apply(&mut p, "0.05"));
        assert_eq!(p.presence_penalty, 0.05);
    }
}
