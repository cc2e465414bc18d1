/// Access to a difficulty object's neighbours.
pub mod object;
