//! Flat-file persistence for club and credential data.
//!
//! Both formats are one record per line with comma-separated fields and no
//! escaping: a field containing a comma will not survive a round trip.

use std::fs;
use std::io;
use std::path::Path;

use crate::models::club::Club;
use crate::models::credential::{CredentialStore, Role};

/// Reads `<name>,<president>,<description>` lines.
///
/// Lines with fewer than three fields are skipped, fields past the third are
/// ignored, and each kept field is trimmed of surrounding whitespace.
pub fn load_clubs(path: impl AsRef<Path>) -> io::Result<Vec<Club>> {
    let contents = fs::read_to_string(path)?;

    Ok(contents.lines().filter_map(parse_club_line).collect())
}

fn parse_club_line(line: &str) -> Option<Club> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < 3 {
        return None;
    }

    Some(Club::new(
        fields[0].trim(),
        fields[1].trim(),
        fields[2].trim(),
    ))
}

/// Rewrites the whole club file. Pending applications have no field in the
/// format and are not written.
pub fn save_clubs(path: impl AsRef<Path>, clubs: &[Club]) -> io::Result<()> {
    let mut contents = String::new();
    for club in clubs {
        contents.push_str(&format!(
            "{},{},{}\n",
            club.name, club.president, club.description
        ));
    }

    fs::write(path, contents)
}

/// Reads `<id>,<password>,<role>` lines. Lines without exactly three fields,
/// or naming a role outside the known set, are skipped.
pub fn load_credentials(path: impl AsRef<Path>) -> io::Result<CredentialStore> {
    let contents = fs::read_to_string(path)?;

    let mut store = CredentialStore::default();
    for line in contents.lines() {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 3 {
            continue;
        }

        if let Some(role) = Role::from_name(fields[2].trim()) {
            store.insert(fields[0].trim(), fields[1].trim(), role);
        }
    }

    Ok(store)
}
