use crate::config::TemplateOptions;
use crate::errors::GenerationError;
use crate::generator::{GenerationConfig, Generator};

/// A deterministic engine that fills a fixed template.
///
/// `{name}` becomes the target name, `{emoji}` becomes `emoji_num` emojis
/// drawn from the palette in order, and `{punctuation}` becomes the
/// punctuation mark repeated `punctuation_level` times.
pub struct TemplateGenerator {
    options: TemplateOptions,
}

impl TemplateGenerator {
    pub fn new(options: TemplateOptions) -> Self {
        Self { options }
    }

    fn repeat_count(&self, field: &'static str, value: i64) -> Result<usize, GenerationError> {
        let count =
            usize::try_from(value).map_err(|_| GenerationError::NegativeCount { field, value })?;
        if count > self.options.max_repeat {
            return Err(GenerationError::CountTooLarge {
                field,
                value,
                max: self.options.max_repeat,
            });
        }
        Ok(count)
    }

    fn emojis(&self, count: usize) -> Result<String, GenerationError> {
        if count > 0 && self.options.emojis.is_empty() {
            return Err(GenerationError::Engine(
                "emoji palette is empty".to_string(),
            ));
        }
        Ok(self
            .options
            .emojis
            .iter()
            .cycle()
            .take(count)
            .map(String::as_str)
            .collect())
    }
}

impl Generator for TemplateGenerator {
    fn start(&self, config: &GenerationConfig) -> Result<String, GenerationError> {
        if config.target_name.is_empty() {
            return Err(GenerationError::EmptyTargetName);
        }
        let emoji_num = self.repeat_count("emojiNum", config.emoji_num)?;
        let punctuation_level = self.repeat_count("punctuationLevel", config.punctuation_level)?;

        let message = self
            .options
            .template
            .replace("{punctuation}", &self.options.punctuation.repeat(punctuation_level))
            .replace("{emoji}", &self.emojis(emoji_num)?)
            // last, so a name that looks like a placeholder is left alone
            .replace("{name}", &config.target_name);
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(name: &str, emoji_num: i64, punctuation_level: i64) -> GenerationConfig {
        GenerationConfig {
            target_name: name.to_string(),
            emoji_num,
            punctuation_level,
        }
    }

    fn generator() -> TemplateGenerator {
        TemplateGenerator::new(TemplateOptions {
            template: "{name}ちゃん、元気{punctuation}{emoji}".to_string(),
            emojis: vec!["😊".to_string(), "💦".to_string()],
            punctuation: "！".to_string(),
            max_repeat: 10,
        })
    }

    #[test]
    fn test_fills_template() {
        let message = generator().start(&config("Taro", 3, 2)).unwrap();
        assert_eq!(message, "Taroちゃん、元気！！😊💦😊");
    }

    #[test]
    fn test_zero_counts_leave_placeholders_empty() {
        let message = generator().start(&config("Hanako", 0, 0)).unwrap();
        assert_eq!(message, "Hanakoちゃん、元気");
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let result = generator().start(&config("", 0, 0));
        assert_eq!(result, Err(GenerationError::EmptyTargetName));
    }

    #[test]
    fn test_negative_counts_are_rejected() {
        assert_eq!(
            generator().start(&config("Taro", -1, 0)),
            Err(GenerationError::NegativeCount {
                field: "emojiNum",
                value: -1
            })
        );
        assert_eq!(
            generator().start(&config("Taro", 0, -5)),
            Err(GenerationError::NegativeCount {
                field: "punctuationLevel",
                value: -5
            })
        );
    }

    #[test]
    fn test_name_is_not_expanded() {
        let message = generator().start(&config("{emoji}", 1, 0)).unwrap();
        assert_eq!(message, "{emoji}ちゃん、元気😊");
    }

    #[test]
    fn test_counts_above_limit_are_rejected() {
        assert_eq!(
            generator().start(&config("Taro", 11, 0)),
            Err(GenerationError::CountTooLarge {
                field: "emojiNum",
                value: 11,
                max: 10
            })
        );
    }

    #[test]
    fn test_empty_palette_only_fails_when_emojis_requested() {
        let generator = TemplateGenerator::new(TemplateOptions {
            emojis: vec![],
            ..TemplateOptions::default()
        });

        assert!(generator.start(&config("Taro", 0, 1)).is_ok());
        assert_eq!(
            generator.start(&config("Taro", 1, 0)),
            Err(GenerationError::Engine("emoji palette is empty".to_string()))
        );
    }
}
