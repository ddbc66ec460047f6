use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub u64);
    };
}

// Each submission owns one placeholder entry in the transcript; the id is how
// the resolution event finds it again, so overlapping submissions never
// interfere.
id_newtype!(SubmissionId);
