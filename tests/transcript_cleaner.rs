use makassar::application::services::{clean_transcript, is_noise_line};
use makassar::domain::CleaningPolicy;

#[test]
fn given_bracketed_timestamp_line_when_first_utterance_then_strips_prefix() {
    let raw = "[00:00:00.000 --> 00:00:02.000]  Hello there\n[00:00:02 --> 00:00:04] ignored second line";

    let result = clean_transcript(raw, CleaningPolicy::FirstUtterance);

    assert_eq!(result, "Hello there");
}

#[test]
fn given_log_and_content_lines_when_full_utterance_then_joins_surviving_lines() {
    let raw = "whisper_init: loading model\nHello\nthere";

    let result = clean_transcript(raw, CleaningPolicy::FullUtterance);

    assert_eq!(result, "Hello there");
}

#[test]
fn given_engine_log_lines_when_first_utterance_then_skips_them() {
    let raw = "whisper_model_load: loading model from /models/ggml-small.bin\nsystem_info: n_threads = 4\nSelamat pagi\n";

    let result = clean_transcript(raw, CleaningPolicy::FirstUtterance);

    assert_eq!(result, "Selamat pagi");
}

#[test]
fn given_timing_lines_when_cleaning_then_drops_them() {
    let raw = "00:00:01 --> 00:00:02\nActual content";

    assert_eq!(
        clean_transcript(raw, CleaningPolicy::FirstUtterance),
        "Actual content"
    );
    assert_eq!(
        clean_transcript(raw, CleaningPolicy::FullUtterance),
        "Actual content"
    );
}

#[test]
fn given_only_noise_lines_when_cleaning_then_falls_back_to_raw_text() {
    let raw = "whisper_init: loading model\noutput_txt: saving output to /tmp/result.txt";

    assert_eq!(clean_transcript(raw, CleaningPolicy::FirstUtterance), raw);
    assert_eq!(clean_transcript(raw, CleaningPolicy::FullUtterance), raw);
}

#[test]
fn given_empty_input_when_cleaning_then_returns_empty() {
    assert_eq!(clean_transcript("", CleaningPolicy::FirstUtterance), "");
    assert_eq!(clean_transcript("", CleaningPolicy::FullUtterance), "");
}

#[test]
fn given_same_input_when_cleaning_twice_then_results_are_identical() {
    let raw = "main: processing audio\n[00:00 --> 00:05] first utterance\nsecond utterance";

    let first = clean_transcript(raw, CleaningPolicy::FirstUtterance);
    let second = clean_transcript(raw, CleaningPolicy::FirstUtterance);

    assert_eq!(first, second);
}

#[test]
fn given_crlf_line_endings_when_cleaning_then_splits_correctly() {
    let raw = "whisper_init: loading\r\nHello\r\nthere\r\n";

    assert_eq!(
        clean_transcript(raw, CleaningPolicy::FullUtterance),
        "Hello there"
    );
}

#[test]
fn given_interior_whitespace_runs_when_full_utterance_then_collapses_to_single_space() {
    let raw = "Hello    big\nwide   world";

    assert_eq!(
        clean_transcript(raw, CleaningPolicy::FullUtterance),
        "Hello big wide world"
    );
}

#[test]
fn given_mixed_case_log_prefix_when_classifying_then_treated_as_noise() {
    assert!(is_noise_line("WHISPER_model_load: loading"));
    assert!(is_noise_line("System_Info: n_threads = 8"));
    assert!(is_noise_line("12:34:56.789 timing"));
    assert!(!is_noise_line("Hello there"));
}

#[test]
fn given_policy_strings_when_parsing_then_maps_to_variants() {
    assert_eq!(
        CleaningPolicy::try_from("first".to_string()).unwrap(),
        CleaningPolicy::FirstUtterance
    );
    assert_eq!(
        CleaningPolicy::try_from("FULL".to_string()).unwrap(),
        CleaningPolicy::FullUtterance
    );
    assert!(CleaningPolicy::try_from("other".to_string()).is_err());
}
