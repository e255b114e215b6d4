use std::fmt::{Display, Formatter};

use crate::models::{CoreError, CoreResult};

/// Expression text that has passed the structural checks applied at parse
/// time. Evaluation happens elsewhere.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Expression(String);

impl Expression {
    pub fn parse(text: &str) -> CoreResult<Self> {
        if text.trim().is_empty() {
            return Err(CoreError::parse_failure("expression must not be empty"));
        }

        let bytes = text.as_bytes();
        let mut index = 0;
        while index < bytes.len() {
            let opens = (bytes[index] == b'$' || bytes[index] == b'#')
                && bytes.get(index + 1) == Some(&b'{');
            if !opens {
                index += 1;
                continue;
            }

            match text[index + 2..].find('}') {
                Some(offset) if offset > 0 => index += offset + 3,
                Some(_) => {
                    return Err(CoreError::parse_failure(format!(
                        "empty expression block at offset {index} in '{text}'"
                    )));
                }
                None => {
                    return Err(CoreError::parse_failure(format!(
                        "unterminated expression block at offset {index} in '{text}'"
                    )));
                }
            }
        }

        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Expression;
    use crate::models::CoreErrorKind;

    #[test]
    fn accepts_literal_and_delimited_expressions() {
        assert_eq!(Expression::parse("${order.total}").unwrap().as_str(), "${order.total}");
        assert!(Expression::parse("#{bean.call(x)}").is_ok());
        assert!(Expression::parse("prefix-${a}-${b}").is_ok());
        assert!(Expression::parse("plain text").is_ok());
    }

    #[test]
    fn rejects_blank_text() {
        let error = Expression::parse("   ").unwrap_err();
        assert_eq!(error.kind, CoreErrorKind::ParseFailure);
    }

    #[test]
    fn rejects_unterminated_or_empty_blocks() {
        assert!(Expression::parse("${order.total").is_err());
        assert!(Expression::parse("${ok} #{broken").is_err());
        assert!(Expression::parse("${}").is_err());
    }
}
