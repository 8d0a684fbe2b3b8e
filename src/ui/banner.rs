/// Title art drawn at the top of every frame. All lines share one width so
/// that centering each line keeps the art aligned.
pub const TITLE: [&str; 6] = [
    r" _____                       ",
    r"|_   _|_   _ _ __   ___ _ __ ",
    r"  | | | | | | '_ \ / _ \ '__|",
    r"  | | | |_| | |_) |  __/ |   ",
    r"  |_|  \__, | .__/ \___|_|   ",
    r"       |___/|_|              ",
];

pub const LEGEND: &str = "type the passage below / (esc)ape to quit";
