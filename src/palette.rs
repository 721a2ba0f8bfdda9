use rand::Rng;

/// Decorative warm tones for circle borders and glows.
pub const WARM_COLORS: [&str; 8] = [
    "#FF6347", // tomato
    "#FF4500", // orange red
    "#FF8C00", // dark orange
    "#FFA500", // orange
    "#FFD700", // gold
    "#FF1493", // deep pink
    "#FF69B4", // hot pink
    "#FFB6C1", // light pink
];

#[inline]
pub fn random_warm_color<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    WARM_COLORS[rng.gen_range(0..WARM_COLORS.len())]
}
