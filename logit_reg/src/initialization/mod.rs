mod random;

pub use random::NormalParamGen;
