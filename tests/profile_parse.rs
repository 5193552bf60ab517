mod common;

use enc0::profile::{ProfileTable, parse};

#[test]
fn test_two_blocks_with_continuations_and_comments() {
	let table = parse(common::SAMPLE_PROFILE);
	assert_eq!(table.len(), 2);

	let x264 = table.get("x264").unwrap();
	assert_eq!(x264.description, "web");
	assert_eq!(x264.options, vec!["-c:v libx264", "-crf 23", "-preset slow"]);

	let archive = table.get("archive").unwrap();
	assert_eq!(archive.description, "cold-storage");
	assert_eq!(archive.options, vec!["-c:v libx265", "-x265-params lossless=1"]);
}

#[test]
fn test_last_definition_wins() {
	let text = "\
# --- profile x web1
-a 1
# --- profile x web2
-b 2
";
	let table = parse(text);
	assert_eq!(table.len(), 1);

	let entry = table.get("x").unwrap();
	assert_eq!(entry.description, "web2");
	assert_eq!(entry.options, vec!["-b 2"]);
}

#[test]
fn test_no_tag_lines_yields_empty_table() {
	let table = parse("just some text\n# a comment\nffmpeg -i a b\n");
	assert!(table.is_empty());
}

#[test]
fn test_tag_line_without_description() {
	let table = parse("# --- profile solo\n-crf 18\n");
	let entry = table.get("solo").unwrap();
	assert_eq!(entry.description, "");
	assert_eq!(entry.options, vec!["-crf 18"]);
}

#[test]
fn test_file_ending_mid_block_is_committed() {
	// trailing continuation line, no blank line, no closing tag
	let table = parse("# --- profile tail end\n-c:v libx264 \\");
	let entry = table.get("tail").unwrap();
	assert_eq!(entry.options, vec!["-c:v libx264"]);
}

#[test]
fn test_encoder_keyword_line_is_not_an_option() {
	let text = "# --- profile p d\nffmpeg -hide_banner \\\n-crf 20\n";
	let table = parse(text);
	assert_eq!(table.get("p").unwrap().options, vec!["-crf 20"]);
}

#[test]
fn test_load_missing_file_is_an_error() {
	let dir = tempfile::tempdir().unwrap();
	let err = ProfileTable::load(&dir.path().join("absent")).unwrap_err();
	assert!(matches!(err, enc0::Error::ProfileFile { .. }));
}
