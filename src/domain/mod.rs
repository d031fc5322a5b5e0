// Domain layer: the superhero record and the repository port. No HTTP or storage details here.

pub mod model;
pub mod ports;
