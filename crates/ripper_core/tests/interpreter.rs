use ripper_core::{LineClassifier, LineKind, OutputEvent, OutputInterpreter};
use pretty_assertions::assert_eq;

fn feed(interpreter: &mut OutputInterpreter, lines: &[&str]) -> Vec<OutputEvent> {
    lines
        .iter()
        .filter_map(|line| interpreter.process(line))
        .collect()
}

#[test]
fn percent_markers_become_exact_fractions() {
    let classifier = LineClassifier::default();
    for (line, expected) in [
        ("0%", 0.0),
        ("100%", 1.0),
        ("[download]  12.5% of 3.2MiB at 1.1MiB/s ETA 00:02", 0.125),
        ("[download]  45.0% of 3.2MiB", 0.45),
        ("[download]   7% of ~ 4.00MiB", 0.07),
        ("99.9%", 99.9 / 100.0),
    ] {
        assert_eq!(
            classifier.event_for(line),
            Some(OutputEvent::Progress { fraction: expected }),
            "line {line:?}"
        );
    }
}

#[test]
fn destination_marker_strips_directory_and_extension() {
    let classifier = LineClassifier::default();
    assert_eq!(
        classifier.event_for("[ExtractAudio] Destination: /any/path/Title.mp3"),
        Some(OutputEvent::ItemCompleted {
            title: "Title".to_string()
        })
    );
    assert_eq!(
        classifier.event_for("Destination: /tmp/out/My Mix/Song One.mp3"),
        Some(OutputEvent::ItemCompleted {
            title: "Song One".to_string()
        })
    );
}

#[test]
fn intermediate_destinations_are_not_items() {
    let classifier = LineClassifier::default();
    assert_eq!(
        classifier.classify("[download] Destination: /tmp/out/Song One.webm"),
        LineKind::Unclassified
    );
}

#[test]
fn classifier_follows_configured_format() {
    let classifier = LineClassifier::new("opus");
    assert_eq!(
        classifier.event_for("Destination: /tmp/a/Track.opus"),
        Some(OutputEvent::ItemCompleted {
            title: "Track".to_string()
        })
    );
    assert_eq!(
        classifier.classify("Destination: /tmp/a/Track.mp3"),
        LineKind::Unclassified
    );
}

#[test]
fn successful_run_emits_events_in_order() {
    let mut interpreter = OutputInterpreter::default();
    let mut events = feed(
        &mut interpreter,
        &[
            "12.5% of 3.2MiB",
            "Destination: /tmp/out/Song One.mp3",
            "45.0% of 3.2MiB",
            "Destination: /tmp/out/Song Two.mp3",
        ],
    );
    events.push(interpreter.finish(0));

    assert_eq!(
        events,
        vec![
            OutputEvent::Progress { fraction: 0.125 },
            OutputEvent::ItemCompleted {
                title: "Song One".to_string()
            },
            OutputEvent::Progress { fraction: 0.45 },
            OutputEvent::ItemCompleted {
                title: "Song Two".to_string()
            },
            OutputEvent::RunFinished {
                items_downloaded: 2,
                exit_code: 0
            },
        ]
    );
}

#[test]
fn items_downloaded_matches_completed_events() {
    let mut interpreter = OutputInterpreter::default();
    let events = feed(
        &mut interpreter,
        &[
            "[youtube:tab] Downloading playlist",
            "Destination: /m/A.mp3",
            "[download] Destination: /m/B.webm",
            "Destination: /m/B.mp3",
            "Deleting original file /m/B.webm",
            "Destination: /m/C.mp3",
        ],
    );
    let completed = events
        .iter()
        .filter(|event| matches!(event, OutputEvent::ItemCompleted { .. }))
        .count();

    assert_eq!(completed, 3);
    assert_eq!(interpreter.items_downloaded(), 3);
    assert_eq!(interpreter.state().items_downloaded(), 3);
}

#[test]
fn failing_run_reports_trailing_unclassified_lines_including_blank_ones() {
    let mut interpreter = OutputInterpreter::default();
    let events = feed(
        &mut interpreter,
        &["ERROR: unable to download", "  ", "Traceback (most recent call last):  "],
    );

    assert!(events.is_empty());
    assert_eq!(
        interpreter.finish(1),
        OutputEvent::RunFailed {
            exit_code: 1,
            trailing_log_lines: vec![
                "ERROR: unable to download".to_string(),
                String::new(),
                "Traceback (most recent call last):".to_string(),
            ],
        }
    );
}

#[test]
fn trailing_lines_are_the_last_five() {
    let mut interpreter = OutputInterpreter::default();
    let lines: Vec<String> = (1..=8).map(|n| format!("line {n}")).collect();
    for line in &lines {
        assert_eq!(interpreter.process(line), None);
    }

    assert_eq!(interpreter.trailing_lines(), lines[3..].to_vec());
    assert_eq!(interpreter.diagnostics(), lines);
}

#[test]
fn diagnostic_buffer_keeps_newest_lines() {
    let mut interpreter = OutputInterpreter::new(LineClassifier::default(), 3, 2);
    for n in 1..=5 {
        interpreter.process(&format!("noise {n}"));
    }

    assert_eq!(
        interpreter.state().unclassified_lines().collect::<Vec<_>>(),
        vec!["noise 3", "noise 4", "noise 5"]
    );
    assert_eq!(
        interpreter.finish(2),
        OutputEvent::RunFailed {
            exit_code: 2,
            trailing_log_lines: vec!["noise 4".to_string(), "noise 5".to_string()],
        }
    );
}

#[test]
fn progress_lines_are_not_diagnostics() {
    let mut interpreter = OutputInterpreter::default();
    feed(&mut interpreter, &["50%", "Destination: /x/Y.mp3"]);

    assert!(interpreter.diagnostics().is_empty());
}

#[test]
fn blank_lines_take_a_slot_in_the_tail() {
    let mut interpreter = OutputInterpreter::default();
    feed(&mut interpreter, &["ERROR: a", "", "ERROR: b"]);

    assert_eq!(
        interpreter.finish(1),
        OutputEvent::RunFailed {
            exit_code: 1,
            trailing_log_lines: vec!["ERROR: a".to_string(), String::new(), "ERROR: b".to_string()],
        }
    );
    assert_eq!(interpreter.diagnostics().len(), 3);
}
