//! Position-based distortion of sampled curves.

pub mod wave;
