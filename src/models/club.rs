use std::collections::HashMap;

use async_graphql::{InputObject, SimpleObject};

/// A university club and its queue of pending membership applications.
#[derive(SimpleObject, Clone, Debug, PartialEq)]
pub struct Club {
    /// The club's name, which must be unique
    pub name: String,
    /// The club president's display name
    pub president: String,
    /// A free-text description of the club
    pub description: String,

    #[graphql(skip)]
    pub pending_applications: Vec<Application>,
}

/// A student's request to join a club, pending until approved.
#[derive(SimpleObject, Clone, Debug, PartialEq)]
pub struct Application {
    /// The applicant's display name
    pub applicant: String,
    /// The text they submitted with their application
    pub text: String,
}

impl Club {
    pub fn new(
        name: impl Into<String>,
        president: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            president: president.into(),
            description: description.into(),
            pending_applications: Vec::new(),
        }
    }

    /// Appends a new application to the pending queue and returns a copy.
    ///
    /// Performs no validation; callers reject empty input before getting here.
    pub fn submit(&mut self, applicant: impl Into<String>, text: impl Into<String>) -> Application {
        let application = Application {
            applicant: applicant.into(),
            text: text.into(),
        };
        self.pending_applications.push(application.clone());

        application
    }

    /// Removes and returns the first pending application from the named
    /// applicant, or `None` if they have none. Later applications under the
    /// same name stay queued.
    pub fn approve(&mut self, applicant: &str) -> Option<Application> {
        let index = self
            .pending_applications
            .iter()
            .position(|application| application.applicant == applicant)?;

        Some(self.pending_applications.remove(index))
    }
}

#[derive(InputObject)]
pub struct NewClub {
    pub name: String,
    pub president: String,
    pub description: String,
}

impl From<NewClub> for Club {
    fn from(new_club: NewClub) -> Self {
        Club::new(new_club.name, new_club.president, new_club.description)
    }
}

/// All clubs, keyed by name.
#[derive(Default)]
pub struct ClubRegistry {
    clubs: HashMap<String, Club>,
}

impl ClubRegistry {
    /// Inserts the club, silently replacing any existing club with the same
    /// name. Last write wins.
    pub fn add(&mut self, club: Club) {
        self.clubs.insert(club.name.clone(), club);
    }

    /// Returns whether a club by that name existed and was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        self.clubs.remove(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Club> {
        self.clubs.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Club> {
        self.clubs.get_mut(name)
    }

    /// A snapshot of all clubs, sorted by name.
    pub fn all(&self) -> Vec<Club> {
        let mut clubs: Vec<Club> = self.clubs.values().cloned().collect();
        clubs.sort_by(|a, b| a.name.cmp(&b.name));

        clubs
    }

    pub fn len(&self) -> usize {
        self.clubs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clubs.is_empty()
    }
}
