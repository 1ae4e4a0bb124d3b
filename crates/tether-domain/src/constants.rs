/// Principal recorded on writes performed without an acting user.
pub const SYSTEM_USER: &str = "system";
