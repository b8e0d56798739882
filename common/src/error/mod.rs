mod echo;
mod factorial;

pub use echo::EchoError;
pub use factorial::FactorialError;
