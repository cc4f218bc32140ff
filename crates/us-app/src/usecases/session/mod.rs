mod set_authenticated;
mod sign_out;
mod update_user_info;

pub use set_authenticated::SetAuthenticated;
pub use sign_out::SignOut;
pub use update_user_info::UpdateUserInfo;
