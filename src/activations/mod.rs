mod act_fn;
mod activation;
mod identity;
mod soft_plus;

pub use act_fn::ActFn;
pub use activation::Activation;
pub use identity::Identity;
pub use soft_plus::SoftPlus;
