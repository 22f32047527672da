use bevy_ecs::prelude::Resource;

/// Running totals for the shift.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    /// Coins the janitor emptied out of the tip bowl.
    pub tips_collected: u32,
    pub visitors_served: u32,
    pub visitors_angered: u32,
    pub fixtures_cleaned: u32,
    pub toilets_unclogged: u32,
}
