use async_trait::async_trait;

use super::{Fixture, FixtureContext, FixtureError, reference};
use crate::constants::fixtures::{CATEGORY_REFERENCE, PROGRAM_REFERENCE};
use crate::db::repositories::program::ProgramRepository;
use crate::models::NewProgram;

struct ProgramSeed {
    title: &'static str,
    synopsis: &'static str,
    category: usize,
}

/// Index into [`super::category::CATEGORIES`].
const ANIMATION: usize = 2;
const FANTASTIQUE: usize = 3;
const HORREUR: usize = 4;

const PROGRAMS: &[ProgramSeed] = &[
    ProgramSeed {
        title: "The Walking Dead",
        synopsis: "Le policier Rick Grimes se réveille après un long coma. Il découvre avec effarement que le monde, ravagé par une épidémie, est envahi par les morts-vivants.",
        category: HORREUR,
    },
    ProgramSeed {
        title: "The Haunting Of Hill House",
        synopsis: "Plusieurs frères et sœurs qui, enfants, ont grandi dans la demeure qui allait devenir la maison hantée la plus célèbre des États-Unis, sont contraints de se retrouver pour faire face à cette tragédie ensemble.",
        category: HORREUR,
    },
    ProgramSeed {
        title: "American Horror Story",
        synopsis: "A chaque saison, son histoire. American Horror Story nous embarque dans des récits à la fois poignants et cauchemardesques, mêlant la peur, le gore et le politiquement correct.",
        category: HORREUR,
    },
    ProgramSeed {
        title: "Love Death And Robots",
        synopsis: "Un yaourt susceptible, des soldats lycanthropes, des robots déchaînés, des monstres-poubelles, des chasseurs de primes cyborgs, des araignées extraterrestres et des démons assoiffés de sang : tout ce beau monde est réuni dans 18 courts métrages animés.",
        category: ANIMATION,
    },
    ProgramSeed {
        title: "Penny Dreadful",
        synopsis: "Dans le Londres ancien, Vanessa Ives, une jeune femme puissante aux pouvoirs hypnotiques, allie ses forces à celles d'Ethan, un garçon rebelle et violent aux allures de cowboy, et de Sir Malcolm, un vieil homme riche aux ressources inépuisables.",
        category: FANTASTIQUE,
    },
    ProgramSeed {
        title: "Fear The Walking Dead",
        synopsis: "La série se déroule au tout début de l'épidémie relatée dans la série mère The Walking Dead et se passe dans la ville de Los Angeles, et non à Atlanta.",
        category: HORREUR,
    },
];

/// Number of `program_{n}` references other fixtures may draw from.
pub const PROGRAM_POOL: usize = PROGRAMS.len();

pub struct ProgramFixtures;

#[async_trait]
impl Fixture for ProgramFixtures {
    fn name(&self) -> &'static str {
        "programs"
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec!["categories"]
    }

    async fn load(&self, ctx: &mut FixtureContext<'_>) -> Result<usize, FixtureError> {
        let repo = ProgramRepository::new(ctx.conn);

        for (i, seed) in PROGRAMS.iter().enumerate() {
            let category_id = ctx.get_reference(&reference(CATEGORY_REFERENCE, seed.category))?;
            let program = repo
                .add(&NewProgram {
                    title: seed.title.to_string(),
                    synopsis: seed.synopsis.to_string(),
                    poster: None,
                    category_id,
                })
                .await?;
            ctx.add_reference(reference(PROGRAM_REFERENCE, i), program.id)?;
        }

        Ok(PROGRAMS.len())
    }
}
