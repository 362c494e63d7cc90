/// Renders decoded bytes as a pasteable Rust constant, eight bytes per line.
pub fn render(bytes: &[u8]) -> String {
    let mut out = String::from("pub const EXAMPLE_PUBKEY: Pubkey = Pubkey::new_from_array([\n");

    for (i, group) in bytes.chunks(8).enumerate() {
        let line = group
            .iter()
            .map(|b| b.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        out.push_str("    ");
        out.push_str(&line);

        // trailing comma on every line except the last
        if (i + 1) * 8 < bytes.len() {
            out.push(',');
        }
        out.push('\n');
    }

    out.push_str("]);");
    out
}
