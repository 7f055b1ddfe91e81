use rpassbook::transport::escp;

#[test]
fn test_basic_commands_byte_exact() {
    assert_eq!(escp::init(), vec![0x1B, 0x40]);
    assert_eq!(escp::line_spacing(30), vec![0x1B, 0x33, 30]);
    assert_eq!(escp::advance_paper(24), vec![0x1B, 0x4A, 24]);
    assert_eq!(escp::reverse_feed(12), vec![0x1B, 0x6A, 12]);
    assert_eq!(escp::CR, 0x0D);
    assert_eq!(escp::LF, 0x0A);
    assert_eq!(escp::FF, 0x0C);
}

#[test]
fn test_absolute_position_is_little_endian() {
    assert_eq!(escp::absolute_position(0), vec![0x1B, 0x24, 0x00, 0x00]);
    assert_eq!(escp::absolute_position(308), vec![0x1B, 0x24, 0x34, 0x01]);
    assert_eq!(escp::absolute_position(0xFFFF), vec![0x1B, 0x24, 0xFF, 0xFF]);
}

#[test]
fn test_chunked_motion_splits_at_operand_limit() {
    // 24 lines at 1/6 inch pitch = 720 units, three ESC J commands.
    let bytes = escp::advance_paper_chunked(720);
    assert_eq!(
        bytes,
        vec![0x1B, 0x4A, 255, 0x1B, 0x4A, 255, 0x1B, 0x4A, 210]
    );

    assert_eq!(escp::advance_paper_chunked(30), vec![0x1B, 0x4A, 30]);
    assert!(escp::advance_paper_chunked(0).is_empty());

    let reverse = escp::reverse_feed_chunked(300);
    assert_eq!(reverse, vec![0x1B, 0x6A, 255, 0x1B, 0x6A, 45]);
}
