const PALETTE: [&str; 12] = [
    "#FF6B6B", // red
    "#4ECDC4", // teal
    "#45B7D1", // blue
    "#96CEB4", // green
    "#FFEAA7", // yellow
    "#DDA0DD", // plum
    "#98D8C8", // mint
    "#F7DC6F", // light yellow
    "#BB8FCE", // light purple
    "#85C1E9", // light blue
    "#F8C471", // orange
    "#82E0AA", // light green
];

/// Up to two uppercase initials, one per space-separated word.
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// Stable avatar background for a display name.
///
/// The hash runs over UTF-16 code units and wraps the shifted value to 32
/// bits while the accumulator itself is not truncated, so colors match the
/// ones the board has always shown for a given author.
pub fn avatar_color(name: &str) -> &'static str {
    let hash = name.encode_utf16().fold(0i64, |hash, unit| {
        let shifted = (hash as i32).wrapping_shl(5) as i64;
        i64::from(unit) + (shifted - hash)
    });
    PALETTE[(hash.unsigned_abs() % PALETTE.len() as u64) as usize]
}
