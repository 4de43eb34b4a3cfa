use plurality_core::{CoreError, Operands};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperandsCommandError {
    #[error("{number:?}: {source}")]
    Number {
        number: String,
        #[source]
        source: CoreError,
    },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct OperandsOptions {
    pub numbers: Vec<String>,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct OperandsReport {
    number: String,
    n: f64,
    i: u64,
    v: usize,
    w: usize,
    f: u64,
    t: u64,
}

pub fn run_operands(options: &OperandsOptions) -> Result<String, OperandsCommandError> {
    let mut reports = Vec::with_capacity(options.numbers.len());
    for number in &options.numbers {
        let ops = Operands::parse(number).map_err(|source| OperandsCommandError::Number {
            number: number.clone(),
            source,
        })?;
        reports.push(OperandsReport {
            number: number.clone(),
            n: ops.n,
            i: ops.i,
            v: ops.v,
            w: ops.w,
            f: ops.f,
            t: ops.t,
        });
    }

    if options.json {
        return Ok(serde_json::to_string_pretty(&reports)?);
    }
    let lines: Vec<String> = reports
        .iter()
        .map(|report| {
            format!(
                "{}\tn={} i={} v={} w={} f={} t={}",
                report.number, report.n, report.i, report.v, report.w, report.f, report.t
            )
        })
        .collect();
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::{OperandsCommandError, OperandsOptions, run_operands};

    fn options(numbers: &[&str], json: bool) -> OperandsOptions {
        OperandsOptions {
            numbers: numbers.iter().map(|number| number.to_string()).collect(),
            json,
        }
    }

    #[test]
    fn prints_one_line_per_number() {
        let output = run_operands(&options(&["2", "1.5e2", "-0.010"], false)).expect("run");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            [
                "2\tn=2 i=2 v=0 w=0 f=0 t=0",
                "1.5e2\tn=150 i=150 v=0 w=0 f=0 t=0",
                "-0.010\tn=0.01 i=0 v=3 w=2 f=10 t=1",
            ]
        );
    }

    #[test]
    fn writes_json_report() {
        let output = run_operands(&options(&["2.50"], true)).expect("run");
        let value: serde_json::Value = serde_json::from_str(&output).expect("json");
        assert_eq!(value[0]["number"], "2.50");
        assert_eq!(value[0]["v"], 2);
        assert_eq!(value[0]["f"], 50);
        assert_eq!(value[0]["t"], 5);
    }

    #[test]
    fn names_the_malformed_number() {
        let err = run_operands(&options(&["1", "12.3.4"], false)).expect_err("malformed");
        assert!(matches!(&err, OperandsCommandError::Number { number, .. } if number == "12.3.4"));
        assert!(err.to_string().starts_with("\"12.3.4\": invalid number"));
    }
}
