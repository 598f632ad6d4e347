pub mod decode;
pub mod encode;
pub mod extract;
pub mod hash;
pub mod multisend;
pub mod status;
