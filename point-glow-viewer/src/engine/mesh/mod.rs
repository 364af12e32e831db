pub mod displacement;
pub mod point_sprite_mesh;
