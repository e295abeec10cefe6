//! Move scripts.
//!
//! One move per line as `FROM TO [PROMOTION]`, using cell indices 0-63.
//! Blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! # opening
//! 40 33
//! 17 26
//! 9 1 queen
//! ```

use gamechat_core::{Cell, ChessKind};
use thiserror::Error;

/// A script line that could not be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("line {line}: {reason}")]
pub struct ScriptError {
    pub line: usize,
    pub reason: String,
}

/// One scripted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptStep {
    /// 1-based line number the move came from.
    pub line: usize,
    pub from: Cell,
    pub to: Cell,
    pub promotion: Option<ChessKind>,
}

fn parse_cell(token: &str, line: usize) -> Result<Cell, ScriptError> {
    token
        .parse::<i32>()
        .ok()
        .and_then(Cell::from_index)
        .ok_or_else(|| ScriptError {
            line,
            reason: format!("'{}' is not a cell index between 0 and 63", token),
        })
}

/// Parses a whole script.
pub fn parse(source: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    let mut steps = Vec::new();
    for (i, raw) in source.lines().enumerate() {
        let line = i + 1;
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() < 2 || tokens.len() > 3 {
            return Err(ScriptError {
                line,
                reason: format!("expected 'FROM TO [PROMOTION]', got '{}'", text),
            });
        }

        let from = parse_cell(tokens[0], line)?;
        let to = parse_cell(tokens[1], line)?;
        let promotion = match tokens.get(2) {
            Some(name) => Some(
                ChessKind::from_name(name)
                    .filter(|k| k.is_promotion_choice())
                    .ok_or_else(|| ScriptError {
                        line,
                        reason: format!("'{}' is not a promotion piece", name),
                    })?,
            ),
            None => None,
        };

        steps.push(ScriptStep {
            line,
            from,
            to,
            promotion,
        });
    }
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_moves_and_skips_comments() {
        let steps = parse("# opening\n40 33\n\n  17 26  \n9 1 q\n").unwrap();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].from.index(), 40);
        assert_eq!(steps[0].to.index(), 33);
        assert_eq!(steps[0].line, 2);
        assert_eq!(steps[1].line, 4);
        assert_eq!(steps[2].promotion, Some(ChessKind::Queen));
    }

    #[test]
    fn rejects_out_of_range_cell() {
        let err = parse("40 64").unwrap_err();
        assert_eq!(err.line, 1);
        assert!(err.reason.contains("64"));
    }

    #[test]
    fn rejects_bad_arity() {
        assert!(parse("40").is_err());
        assert!(parse("1 2 queen extra").is_err());
    }

    #[test]
    fn rejects_king_promotion() {
        let err = parse("# x\n9 1 king").unwrap_err();
        assert_eq!(err.line, 2);
    }
}
