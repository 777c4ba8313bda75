// Curated fallback answers
//
// A small keyed lookup table checked before any live search call. Entries
// match when the query contains both the topic and the location keyword,
// case-insensitively. The table is constant for the process lifetime.

/// One hand-authored answer keyed by topic + location.
#[derive(Debug, Clone)]
pub struct CuratedEntry {
    pub topic: &'static str,
    pub location: &'static str,
    pub answer: &'static str,
}

/// Lookup table of curated answers.
pub struct CuratedAnswers {
    entries: Vec<CuratedEntry>,
}

impl CuratedAnswers {
    /// Table with the stock entries.
    pub fn new() -> Self {
        Self {
            entries: vec![CuratedEntry {
                topic: "gym",
                location: "karachi",
                answer: KARACHI_GYMS,
            }],
        }
    }

    /// Empty table, for tests and shells that want live search only.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add an entry. New answers extend the table without touching the
    /// dispatch control flow.
    pub fn with_entry(mut self, entry: CuratedEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Find the curated answer for a query, if any entry's topic and
    /// location both appear in it.
    pub fn lookup(&self, query: &str) -> Option<&'static str> {
        let lower = query.to_lowercase();
        self.entries
            .iter()
            .find(|e| lower.contains(e.topic) && lower.contains(e.location))
            .map(|e| e.answer)
    }
}

impl Default for CuratedAnswers {
    fn default() -> Self {
        Self::new()
    }
}

/// Pre-authored listing of popular Karachi gyms.
pub const KARACHI_GYMS: &str = "\
Popular sports gyms in Karachi include:
1. Powerhouse Gym - ARENA (Main Karsaz): state-of-the-art fitness equipment, \
indoor and outdoor sports, bowling alley, and a cafe.
2. Shapes Active LifeStyle (McNeil Road): hi-tech cardio and resistance \
machines, badminton, squash and table tennis courts, indoor pools, steam \
rooms and saunas.
3. CORE Fitness (Ocean Tower, Clifton): a 15,000 square foot lifestyle hub \
with modern equipment, personal training, and a health cafe.
4. Structure Health & Fitness (Badar Commercial, DHA): boutique fitness \
center with MMA, boxing, and CrossFit.
5. Platinum Fitness Center (Emerald Tower, Clifton): powerlifting, Olympic \
weightlifting and CrossFit, with meal plans.
6. Element Fitness Center (Shaheed-e-Millat Road): MMA, cardio kickboxing, \
Brazilian Jiu-Jitsu, Muay Thai, and yoga.
7. TriFit Fitness Club (Sea View): boutique luxury gym with modern equipment \
and group classes.
8. Atmosphere Fitness (Old Queens Road): top-tier equipment, a separate \
ladies' gym, archery, and horse riding.
9. VelocityX (Tipu Sultan Road): Zumba, Pilates, yoga, and specialized \
programs.
10. Body Evolution (Bahadurabad): premium gym with MMA classes, sauna, and a \
protein cafe.";
