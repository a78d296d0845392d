mod filter;
mod hosts;
mod layout;
mod util;
