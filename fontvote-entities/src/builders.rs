pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{font_builder::*, vote_builder::*};

pub mod font_builder {

    use super::*;
    use crate::{font::*, url::Url};

    #[derive(Debug)]
    pub struct FontBuild {
        font: Font,
    }

    impl FontBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.font.id = FontId::new(id);
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.font.name = name.into();
            self
        }
        pub fn url(mut self, url: &str) -> Self {
            self.font.url = url.parse().unwrap();
            self
        }
        pub fn upvotes(mut self, v: VoteCount) -> Self {
            self.font.upvotes = v;
            self
        }
        pub fn downvotes(mut self, v: VoteCount) -> Self {
            self.font.downvotes = v;
            self
        }
        pub fn finish(self) -> Font {
            self.font
        }
    }

    impl Builder for Font {
        type Build = FontBuild;
        fn build() -> FontBuild {
            FontBuild {
                font: Font {
                    id: FontId::new(0),
                    name: String::new(),
                    url: Url::parse("https://fonts.example.com/font.css").unwrap(),
                    upvotes: 0,
                    downvotes: 0,
                },
            }
        }
    }

}

pub mod vote_builder {

    use super::*;
    use crate::{font::*, time::*, vote::*, voter::*};

    #[derive(Debug)]
    pub struct VoteBuild {
        vote: Vote,
    }

    impl VoteBuild {
        pub fn font_id(mut self, id: i64) -> Self {
            self.vote.font_id = FontId::new(id);
            self
        }
        pub fn voter(mut self, voter: VoterId) -> Self {
            self.vote.voter = voter;
            self
        }
        pub fn direction(mut self, direction: VoteDirection) -> Self {
            self.vote.direction = direction;
            self
        }
        pub fn finish(self) -> Vote {
            self.vote
        }
    }

    impl Builder for Vote {
        type Build = VoteBuild;
        fn build() -> VoteBuild {
            VoteBuild {
                vote: Vote {
                    font_id: FontId::new(0),
                    voter: VoterId::new(),
                    direction: VoteDirection::Up,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}
