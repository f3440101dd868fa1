pub mod check;
pub mod claims;
pub mod dispatch;
pub mod evidence;
pub mod providers;
pub mod shared;
