//! Result rendering.

use anyhow::Context;
use apportion_core::Apportionment;
use serde::Serialize;

use crate::cli::OutputFormat;

#[derive(Serialize)]
struct SharesOutput<'a> {
    shares: &'a [u64],
}

/// Renders an apportionment for stdout.
pub fn render(
    result: &Apportionment,
    format: OutputFormat,
    explain: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(result, explain)),
        OutputFormat::Json => {
            let json = if explain {
                serde_json::to_string(result)
            } else {
                serde_json::to_string(&SharesOutput {
                    shares: &result.shares,
                })
            };
            json.context("Failed to serialize result")
        }
    }
}

fn render_text(result: &Apportionment, explain: bool) -> String {
    let shares = join(&result.shares);
    if !explain {
        return shares;
    }
    format!(
        "{shares}\nraw: {}\nmode: {}\ngap: {}",
        join(&result.raw),
        result.mode,
        result.gap
    )
}

fn join(values: &[u64]) -> String {
    values
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use apportion_core::AdjustmentMode;

    fn sample() -> Apportionment {
        Apportionment {
            raw: vec![3, 3, 3],
            shares: vec![4, 3, 3],
            mode: AdjustmentMode::Increment,
            gap: 1,
        }
    }

    #[test]
    fn test_render_text() {
        assert_eq!(render(&sample(), OutputFormat::Text, false).unwrap(), "4 3 3");
    }

    #[test]
    fn test_render_text_explain() {
        assert_eq!(
            render(&sample(), OutputFormat::Text, true).unwrap(),
            "4 3 3\nraw: 3 3 3\nmode: increment\ngap: 1"
        );
    }

    #[test]
    fn test_render_json() {
        assert_eq!(
            render(&sample(), OutputFormat::Json, false).unwrap(),
            r#"{"shares":[4,3,3]}"#
        );
    }

    #[test]
    fn test_render_json_explain() {
        assert_eq!(
            render(&sample(), OutputFormat::Json, true).unwrap(),
            r#"{"raw":[3,3,3],"shares":[4,3,3],"mode":"increment","gap":1}"#
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(
            render(&Apportionment::empty(), OutputFormat::Text, false).unwrap(),
            ""
        );
    }
}
