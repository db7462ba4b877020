use anyhow::Result;
use timeword::core::PhraseFormatter;
use timeword::{time_word, TimeOfDay, TimeWordFormatter};

#[test]
fn test_documented_phrases() -> Result<()> {
    let cases = [
        ("00:00", "midnight"),
        ("12:00", "noon"),
        ("06:01", "six oh one am"),
        ("12:09", "twelve oh nine pm"),
        ("01:00", "one oclock am"),
        ("06:10", "six ten am"),
        ("06:18", "six eighteen am"),
        ("06:30", "six thirty am"),
        ("10:34", "ten thirty four am"),
        ("23:23", "eleven twenty three pm"),
        ("00:12", "twelve twelve am"),
    ];

    for (input, expected) in cases {
        assert_eq!(time_word(input)?, expected, "input {input}");
    }
    Ok(())
}

/// Walks every minute of the day.
#[test]
fn test_every_valid_time_is_well_formed() -> Result<()> {
    let formatter = TimeWordFormatter::new();

    for hour in 0..24u8 {
        for minute in 0..60u8 {
            let input = format!("{:02}:{:02}", hour, minute);
            let phrase = formatter.format(&input)?;

            assert!(!phrase.is_empty(), "{input}");
            assert_eq!(phrase.trim(), phrase, "{input} has outer whitespace");
            assert!(!phrase.contains("  "), "{input} has a double space");
            assert_eq!(phrase.to_lowercase(), phrase, "{input} is not lowercase");

            if (hour, minute) != (0, 0) && (hour, minute) != (12, 0) {
                let period = if hour < 12 { " am" } else { " pm" };
                assert!(phrase.ends_with(period), "{input} -> {phrase}");
            }

            let time = TimeOfDay::new(hour, minute).expect("in range");
            assert_eq!(formatter.format_time(time), phrase);
        }
    }
    Ok(())
}

#[test]
fn test_repeated_calls_are_deterministic() -> Result<()> {
    let first = time_word("17:45")?;
    for _ in 0..10 {
        assert_eq!(time_word("17:45")?, first);
    }
    assert_eq!(first, "five forty five pm");
    Ok(())
}

#[test]
fn test_formatter_is_shareable_across_threads() {
    let formatter = TimeWordFormatter::new();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || formatter.format(&format!("0{}:05", i + 1)).unwrap())
        })
        .collect();

    let phrases: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        phrases,
        vec!["one oh five am", "two oh five am", "three oh five am", "four oh five am"]
    );
}

#[test]
fn test_malformed_input_is_invalid_time_format() {
    for input in ["", "6:01", "24:00", "12:60", "ab:cd", "12:00pm", "1200"] {
        let err = time_word(input).unwrap_err();
        assert!(err.is_input_error(), "{input:?}: {err}");
        assert!(err.to_string().contains(&format!("'{input}'")));
    }
}
