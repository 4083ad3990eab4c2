pub mod alphabets;
pub mod decode;
pub mod encode;
pub mod ipv6;
pub mod random;
