use rand::Rng;

/// One random scatter target per point, generated once at load time and
/// immutable afterwards. The vertex stage blends each point toward its target
/// by the animation blend factor.
#[derive(Debug, Clone)]
pub struct DisplacementField {
    targets: Vec<[f32; 3]>,
}

impl DisplacementField {
    /// Draw `count` targets with each component uniform in `[-range, range]`.
    pub fn generate<R: Rng>(count: usize, range: f32, rng: &mut R) -> Self {
        let mut targets = Vec::with_capacity(count);
        for _ in 0..count {
            targets.push([
                rng.gen_range(-range..=range),
                rng.gen_range(-range..=range),
                rng.gen_range(-range..=range),
            ]);
        }
        Self { targets }
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn target(&self, index: usize) -> [f32; 3] {
        self.targets[index]
    }

    /// Flat scalar view of the targets, three floats per point.
    pub fn as_scalars(&self) -> &[f32] {
        bytemuck::cast_slice(&self.targets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn field_has_three_scalars_per_point() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = DisplacementField::generate(257, 1000.0, &mut rng);

        assert_eq!(field.len(), 257);
        assert_eq!(field.as_scalars().len(), 3 * 257);
    }

    #[test]
    fn every_component_stays_within_range() {
        let range = 1000.0;
        let mut rng = StdRng::seed_from_u64(42);
        let field = DisplacementField::generate(4096, range, &mut rng);

        for &scalar in field.as_scalars() {
            assert!(scalar >= -range && scalar <= range, "{scalar} out of range");
        }
    }

    #[test]
    fn generation_is_deterministic_for_a_fixed_seed() {
        let a = DisplacementField::generate(64, 10.0, &mut StdRng::seed_from_u64(9));
        let b = DisplacementField::generate(64, 10.0, &mut StdRng::seed_from_u64(9));

        assert_eq!(a.as_scalars(), b.as_scalars());
    }

    #[test]
    fn empty_field_is_empty() {
        let field = DisplacementField::generate(0, 1.0, &mut StdRng::seed_from_u64(0));
        assert!(field.is_empty());
    }
}
