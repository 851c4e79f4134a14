//! Flag precedence and rendering scenarios on isolated logger instances.

mod common;

use common::SharedBuf;
use duolog::Logger;
use regex::Regex;

fn captured_info() -> (Logger, SharedBuf) {
    let logger = Logger::new();
    let info_buf = SharedBuf::new();
    logger.set_info_output_direct(info_buf.sink());
    (logger, info_buf)
}

#[test]
fn date_flag_renders_ahead_of_the_channel_tag() {
    let (logger, info_buf) = captured_info();
    logger.set_info_flags("date");
    logger.info("hello");

    let pattern = Regex::new(r"^\d{4}/\d{2}/\d{2} \[INFO\]\thello\n$").unwrap();
    assert!(
        pattern.is_match(&info_buf.contents()),
        "got: {:?}",
        info_buf.contents()
    );
}

#[test]
fn unset_flags_fall_back_to_the_date_time_baseline() {
    // no explicit flags anywhere: channel is unset, defaults resolve
    // to the hard-coded date+time baseline
    let (logger, info_buf) = captured_info();
    logger.info("x");

    let pattern = Regex::new(r"^\d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2} \[INFO\]\tx\n$").unwrap();
    assert!(
        pattern.is_match(&info_buf.contents()),
        "got: {:?}",
        info_buf.contents()
    );
}

#[test]
fn unrecognized_names_mean_explicitly_no_formatting() {
    // distinct from unset: nothing is inherited from the defaults
    let (logger, info_buf) = captured_info();
    logger.set_info_flags("sparkles,emoji");
    logger.info("plain");

    assert_eq!(info_buf.contents(), "[INFO]\tplain\n");
}

#[test]
fn setting_the_same_flags_twice_is_idempotent() {
    let (logger, info_buf) = captured_info();
    logger.set_info_flags("shortfile");
    logger.set_info_flags("shortfile");
    logger.info("a");
    logger.set_info_flags("shortfile");
    logger.info("b");

    let contents = info_buf.contents();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    for line in lines {
        assert!(line.contains("flag_rendering.rs:"), "got: {:?}", line);
    }
}

#[test]
fn default_change_is_not_retroactive_for_bound_channels() {
    let (logger, info_buf) = captured_info();
    // first write binds the formatter against the date+time baseline
    logger.info("first");
    logger.set_default_flags("shortfile");
    logger.info("second");
    // an explicit unset re-resolves against the new defaults
    logger.set_info_flags("");
    logger.info("third");

    let contents = info_buf.contents();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    let stamped = Regex::new(r"^\d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2} \[INFO\]\t").unwrap();
    assert!(stamped.is_match(lines[0]), "got: {:?}", lines[0]);
    assert!(stamped.is_match(lines[1]), "got: {:?}", lines[1]);
    assert!(lines[2].contains("flag_rendering.rs:"), "got: {:?}", lines[2]);
    assert!(!stamped.is_match(lines[2]), "got: {:?}", lines[2]);
}

#[test]
fn messages_with_a_trailing_newline_are_not_doubled() {
    let (logger, info_buf) = captured_info();
    logger.set_info_flags("unknown-only");
    logger.info("done\n");

    assert_eq!(info_buf.contents(), "[INFO]\tdone\n");
}
