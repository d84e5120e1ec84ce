//! The full walkthrough: every demonstration run in order, recorded as a
//! transcript of titled sections.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::capture::make_incrementer;
use crate::error::Result;
use crate::function_values::{
    MathFunction, add_two_ints, count_to_zero, math_result, multiply_two_ints,
};
use crate::signatures::{align_right, arithmetic_mean, pair_label, swap_two_ints, with_default};
use crate::sorting::{backwards, reverse_sorted_forms, sorted_by, spell_digits};
use crate::thunk::{CustomerLine, ProviderQueue, serve_customer};
use crate::trailing::{sort_descending, with_closure};

/// Inputs for every demonstration. Defaults reproduce the classic walkthrough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkthroughConfig {
    pub labelled_pair: (i64, i64),
    pub default_override: i64,
    pub mean_inputs: Vec<f64>,
    pub align_text: String,
    pub align_width: usize,
    pub align_pad: char,
    pub swap_pair: (i64, i64),
    pub math_operands: (i64, i64),
    pub passed_operands: (i64, i64),
    pub countdown_start: i64,
    pub names: Vec<String>,
    pub digit_numbers: Vec<u64>,
    pub increment_amount: i64,
    pub external_total: i64,
    pub customers: Vec<String>,
    pub collected_providers: usize,
}

impl Default for WalkthroughConfig {
    fn default() -> Self {
        let names: Vec<String> = ["Chris", "Alex", "Ewa", "Barry", "Daniella"]
            .into_iter()
            .map(String::from)
            .collect();
        Self {
            labelled_pair: (1, 2),
            default_override: 22,
            mean_inputs: vec![1.0, 2.0, 3.0, 4.0, 5.0],
            align_text: "hello".to_string(),
            align_width: 10,
            align_pad: '*',
            swap_pair: (3, 10),
            math_operands: (2, 3),
            passed_operands: (3, 5),
            countdown_start: 3,
            names: names.clone(),
            digit_numbers: vec![16, 58, 510],
            increment_amount: 10,
            external_total: 100,
            customers: names,
            collected_providers: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub sections: Vec<Section>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a new section; subsequent lines go into it.
    pub fn section(&mut self, title: impl Into<String>) {
        let title = title.into();
        log::info!("== {}", title);
        self.sections.push(Section {
            title,
            lines: Vec::new(),
        });
    }

    pub fn push(&mut self, line: impl Into<String>) {
        let line = line.into();
        log::debug!("{}", line);
        match self.sections.last_mut() {
            Some(section) => section.lines.push(line),
            None => self.sections.push(Section {
                title: String::new(),
                lines: vec![line],
            }),
        }
    }

    pub fn extend<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for line in lines {
            self.push(line);
        }
    }

    pub fn find(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.title == title)
    }

    /// All lines, in order, ignoring section boundaries
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.sections
            .iter()
            .flat_map(|section| section.lines.iter().map(String::as_str))
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, section) in self.sections.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            if !section.title.is_empty() {
                writeln!(f, "== {}", section.title)?;
            }
            for line in &section.lines {
                writeln!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}

pub const CALLING_CONVENTIONS: &str = "Calling conventions";
pub const FUNCTION_VALUES: &str = "Functions as values";
pub const SORTING: &str = "Sorting with closures";
pub const TRAILING_CLOSURES: &str = "Trailing closures";
pub const CAPTURED_STATE: &str = "Captured state";
pub const DEFERRED_EVALUATION: &str = "Deferred evaluation";

/// Runs every demonstration in order.
pub fn run(config: &WalkthroughConfig) -> Result<Transcript> {
    let mut transcript = Transcript::new();

    calling_conventions(config, &mut transcript)?;
    function_values(config, &mut transcript)?;
    sorting(config, &mut transcript);
    trailing_closures(config, &mut transcript);
    captured_state(config, &mut transcript);
    deferred_evaluation(config, &mut transcript)?;

    Ok(transcript)
}

fn calling_conventions(config: &WalkthroughConfig, transcript: &mut Transcript) -> Result<()> {
    transcript.section(CALLING_CONVENTIONS);

    let (first, second) = config.labelled_pair;
    transcript.push(pair_label(first, second));
    transcript.push(with_default(None).to_string());
    transcript.push(with_default(Some(config.default_override)).to_string());

    let mean = arithmetic_mean(&config.mean_inputs)?;
    transcript.push(format!("{:?}", mean));

    transcript.push(align_right(&config.align_text, config.align_width, config.align_pad));

    let (mut some_int, mut another_int) = config.swap_pair;
    swap_two_ints(&mut some_int, &mut another_int);
    transcript.push(format!("now some_int is {some_int}, another_int is {another_int}"));

    Ok(())
}

fn function_values(config: &WalkthroughConfig, transcript: &mut Transcript) -> Result<()> {
    transcript.section(FUNCTION_VALUES);

    let (a, b) = config.math_operands;
    let mut math_function: MathFunction = add_two_ints;
    transcript.push(format!("Result: {}", math_function(a, b)));
    math_function = multiply_two_ints;
    transcript.push(format!("Result: {}", math_function(a, b)));

    let (a, b) = config.passed_operands;
    transcript.push(math_result(add_two_ints, a, b));

    transcript.extend(count_to_zero(config.countdown_start)?);

    Ok(())
}

fn sorting(config: &WalkthroughConfig, transcript: &mut Transcript) {
    transcript.section(SORTING);

    let reversed = sorted_by(&config.names, backwards);
    transcript.push(format!("{:?}", reversed));

    let disagreeing: Vec<&str> = reverse_sorted_forms(&config.names)
        .into_iter()
        .filter(|(_, sorted)| *sorted != reversed)
        .map(|(form, _)| form)
        .collect();
    if disagreeing.is_empty() {
        transcript.push("every closure form agrees");
    } else {
        log::warn!("closure forms disagree: {:?}", disagreeing);
        transcript.push(format!("forms disagreeing: {:?}", disagreeing));
    }
}

fn trailing_closures(config: &WalkthroughConfig, transcript: &mut Transcript) {
    transcript.section(TRAILING_CLOSURES);

    let reversed = with_closure(|| sort_descending(&config.names));
    transcript.push(format!("{:?}", reversed));

    let string_numbers = spell_digits(&config.digit_numbers);
    transcript.push(format!("{:?}", string_numbers));
}

fn captured_state(config: &WalkthroughConfig, transcript: &mut Transcript) {
    transcript.section(CAPTURED_STATE);

    let mut incrementer = make_incrementer(config.increment_amount);
    transcript.push(incrementer.call().to_string());
    transcript.push(incrementer.call().to_string());
    transcript.push(incrementer.running_total().get().to_string());

    incrementer.running_total().set(config.external_total);
    transcript.push(incrementer.call().to_string());
}

fn deferred_evaluation(config: &WalkthroughConfig, transcript: &mut Transcript) -> Result<()> {
    transcript.section(DEFERRED_EVALUATION);

    let customers_in_line = CustomerLine::new(config.customers.iter().cloned());

    // Explicit closure at the call site, then a ready-made provider.
    transcript.push(serve_customer(|| customers_in_line.remove_first())?);
    transcript.push(serve_customer(customers_in_line.provider())?);

    let mut queue = ProviderQueue::new();
    for _ in 0..config.collected_providers {
        let collected = queue.collect(customers_in_line.provider());
        transcript.push(format!("Collected {} closure(s)", collected));
    }
    transcript.extend(queue.drain()?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_walkthrough_runs() {
        let transcript = run(&WalkthroughConfig::default()).unwrap();
        let titles: Vec<&str> = transcript.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                CALLING_CONVENTIONS,
                FUNCTION_VALUES,
                SORTING,
                TRAILING_CLOSURES,
                CAPTURED_STATE,
                DEFERRED_EVALUATION
            ]
        );
    }

    #[test]
    fn test_push_without_section() {
        let mut transcript = Transcript::new();
        transcript.push("loose");
        assert_eq!(transcript.lines().collect::<Vec<_>>(), vec!["loose"]);
        assert_eq!(transcript.to_string(), "loose\n");
    }

    #[test]
    fn test_empty_mean_inputs_fail() {
        let config = WalkthroughConfig {
            mean_inputs: Vec::new(),
            ..WalkthroughConfig::default()
        };
        assert!(run(&config).unwrap_err().is_precondition_violation());
    }

    #[test]
    fn test_far_countdown_start_fails() {
        let config = WalkthroughConfig {
            countdown_start: i64::MAX,
            ..WalkthroughConfig::default()
        };
        assert!(matches!(run(&config), Err(crate::LabError::InvalidArgument(_))));
    }

    #[test]
    fn test_short_customer_line_fails() {
        let config = WalkthroughConfig {
            customers: vec!["Chris".to_string(), "Alex".to_string(), "Ewa".to_string()],
            ..WalkthroughConfig::default()
        };
        assert!(run(&config).unwrap_err().is_precondition_violation());
    }
}
