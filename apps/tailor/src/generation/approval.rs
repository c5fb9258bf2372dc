//! Interactive skill approval — asks the user, one suggestion at a time, whether to add it.

use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};

use tracing::info;

use crate::generation::skills::SkillMap;

/// Walks every suggestion not already in `known_skills` and prompts for a y/n answer.
///
/// An accepted skill is appended to `selected[category]` (the category is created if
/// needed) and inserted into `known_skills`, so it is never offered twice.
/// Any answer other than `y`, including end of input, rejects.
/// Returns the accepted skills in the order they were accepted.
pub fn approve_suggested_skills<R: BufRead, W: Write>(
    suggested: &SkillMap,
    selected: &mut SkillMap,
    known_skills: &mut BTreeSet<String>,
    input: &mut R,
    output: &mut W,
) -> io::Result<Vec<String>> {
    let mut accepted = Vec::new();
    if suggested.is_empty() {
        return Ok(accepted);
    }

    info!("Suggested Skills to Consider Adding:");
    for (category, items) in suggested {
        for skill in items {
            if known_skills.contains(skill) {
                continue;
            }

            write!(
                output,
                "Would you like to include '{skill}' under '{category}'? (y/n): "
            )?;
            output.flush()?;

            let mut answer = String::new();
            input.read_line(&mut answer)?;
            if answer.trim().to_lowercase() != "y" {
                continue;
            }

            let entry = selected.entry(category.clone()).or_default();
            if !entry.contains(skill) {
                entry.push(skill.clone());
            }
            known_skills.insert(skill.clone());
            accepted.push(skill.clone());
        }
    }

    Ok(accepted)
}
