//! Walkthrough transcript tests
//!
//! The default configuration reproduces the classic walkthrough output
//! line for line.

use closure_lab::walkthrough::{self, CAPTURED_STATE, DEFERRED_EVALUATION, FUNCTION_VALUES};
use closure_lab::{Transcript, WalkthroughConfig};

fn default_transcript() -> Transcript {
    walkthrough::run(&WalkthroughConfig::default()).expect("default walkthrough runs")
}

#[test]
fn default_transcript_lines() {
    let transcript = default_transcript();
    let lines: Vec<&str> = transcript.lines().collect();

    assert_eq!(
        lines,
        vec![
            "1,2",
            "12",
            "22",
            "3.0",
            "*****hello",
            "now some_int is 10, another_int is 3",
            "Result: 5",
            "Result: 6",
            "Result: 8",
            "3...",
            "2...",
            "1...",
            "Zero!",
            r#"["Ewa", "Daniella", "Chris", "Barry", "Alex"]"#,
            "every closure form agrees",
            r#"["Ewa", "Daniella", "Chris", "Barry", "Alex"]"#,
            r#"["OneSix", "FiveEight", "FiveOneZero"]"#,
            "10",
            "20",
            "20",
            "110",
            "Now serving Chris!",
            "Now serving Alex!",
            "Collected 1 closure(s)",
            "Collected 2 closure(s)",
            "Now serving Ewa!",
            "Now serving Barry!",
        ]
    );
}

#[test]
fn captured_state_follows_external_writes() {
    let config = WalkthroughConfig {
        increment_amount: 5,
        external_total: -50,
        ..WalkthroughConfig::default()
    };
    let transcript = walkthrough::run(&config).unwrap();
    let section = transcript.find(CAPTURED_STATE).unwrap();
    assert_eq!(section.lines, vec!["5", "10", "10", "-45"]);
}

#[test]
fn countdown_from_negative_start() {
    let config = WalkthroughConfig {
        countdown_start: -2,
        ..WalkthroughConfig::default()
    };
    let transcript = walkthrough::run(&config).unwrap();
    let section = transcript.find(FUNCTION_VALUES).unwrap();
    assert_eq!(&section.lines[3..], &["-2...", "-1...", "Zero!"]);
}

#[test]
fn no_collected_providers() {
    let config = WalkthroughConfig {
        collected_providers: 0,
        ..WalkthroughConfig::default()
    };
    let transcript = walkthrough::run(&config).unwrap();
    let section = transcript.find(DEFERRED_EVALUATION).unwrap();
    assert_eq!(section.lines, vec!["Now serving Chris!", "Now serving Alex!"]);
}

#[test]
fn transcript_serializes_to_json() {
    let transcript = default_transcript();
    let json = serde_json::to_value(&transcript).unwrap();

    let sections = json["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 6);
    assert_eq!(sections[4]["title"], "Captured state");
    assert_eq!(sections[4]["lines"][3], "110");

    let back: Transcript = serde_json::from_value(json).unwrap();
    assert_eq!(back, transcript);
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let config: WalkthroughConfig =
        serde_json::from_str(r#"{ "align_text": "rust", "align_pad": "-" }"#).unwrap();
    assert_eq!(config.align_text, "rust");
    assert_eq!(config.align_pad, '-');
    assert_eq!(config.align_width, 10);
    assert_eq!(config.names, WalkthroughConfig::default().names);
}
