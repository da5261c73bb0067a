use super::*;

#[test]
fn dot_frames_cycle_through_empty_to_three() {
    let frames: Vec<&str> = (0u32..9).map(dot_frame).collect();
    assert_eq!(
        frames,
        vec!["", ".", "..", "...", "", ".", "..", "...", ""]
    );
}

#[test]
fn typewriter_yields_each_prefix_once() {
    let frames: Vec<String> = Typewriter::new("hi!").collect();
    assert_eq!(frames, vec!["h", "hi", "hi!"]);
}

#[test]
fn typewriter_frames_are_prefixes_ending_at_full_text() {
    let text = "hello world";
    let frames: Vec<String> = Typewriter::new(text).collect();

    assert_eq!(frames.len(), text.chars().count());
    for frame in &frames {
        assert!(text.starts_with(frame.as_str()));
    }
    assert_eq!(frames.last().map(String::as_str), Some(text));
}

#[test]
fn typewriter_empty_text_yields_nothing() {
    assert_eq!(Typewriter::new("").next(), None);
}

#[test]
fn typewriter_steps_on_char_boundaries() {
    let frames: Vec<String> = Typewriter::new("héllo 🦀").collect();
    assert_eq!(frames.len(), 7);
    assert_eq!(frames[1], "hé");
    assert_eq!(frames.last().map(String::as_str), Some("héllo 🦀"));
}

#[test]
fn typewriter_rerun_produces_same_final_frame() {
    let first: Vec<String> = Typewriter::new("same").collect();
    let second: Vec<String> = Typewriter::new("same").collect();
    assert_eq!(first, second);
}
