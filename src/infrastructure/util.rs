use crate::application::ports::util::SlugGenerator;
use crate::domain::slug::generate_slug;

/// Accent-folding slugger shared by every talent table.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        generate_slug(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_accents() {
        assert_eq!(DefaultSlugGenerator.slugify("José Ñandú"), "jose-nandu");
    }
}
