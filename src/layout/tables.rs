//! Per aspect-ratio constant tables for both template families.
//!
//! These fractions are asset-pack data, authored together with the template
//! art; nothing here is derived. Coordinates are fractions of frame width and
//! height (see [`crate::geometry::FracBox`] for the addressing modes).

use crate::geometry::FracBox;

use super::{ActionBoxes, AspectRatio, IntroBoxes, ScoreboardBoxes};

/// Constant table for the rectangle template family at one aspect ratio.
#[derive(Debug, Clone, Copy)]
pub struct RectangleTable {
    /// Horizontal shift applied to every x coordinate by the `center` variant.
    pub center_shift: f64,
    /// Team-logo height as a fraction of frame height.
    pub logo_frac: f64,
    /// League-logo height as a fraction of frame height.
    pub league_logo_frac: f64,
    /// Action/player icon height as a fraction of frame height.
    pub icon_frac: f64,
    pub scoreboard: ScoreboardBoxes,
    pub intro: IntroBoxes,
    pub action: ActionBoxes,
}

/// Constant table for the diamond template family at one aspect ratio.
#[derive(Debug, Clone, Copy)]
pub struct DiamondTable {
    pub center_shift: f64,
    pub logo_frac: f64,
    pub league_logo_frac: f64,
    pub icon_frac: f64,
    /// League badge diamond center, fractions of width/height.
    pub badge_center: (f64, f64),
    /// Badge half-diagonal as a fraction of frame height.
    pub badge_half_frac: f64,
    /// Height of the cantilevered team blocks, fraction of frame height.
    pub block_h_frac: f64,
    /// Width of a team name block, fraction of frame width.
    pub name_w_frac: f64,
    /// Width of a score block, fraction of frame width.
    pub score_w_frac: f64,
    /// Width of a jersey-color stripe, fraction of frame width.
    pub stripe_w_frac: f64,
    pub intro_home_center: (f64, f64),
    pub intro_visiting_center: (f64, f64),
    pub intro_half_frac: f64,
    /// Vertical band (y0, y1) for the intro team labels.
    pub intro_label_band: (f64, f64),
    pub action: ActionBoxes,
}

/// Width/height ratios for named logos whose source art is not square.
/// Keyed by exact asset identifier.
pub const ICON_ASPECT_OVERRIDES: &[(&str, f64)] = &[
    ("league_premier", 1.28),
    ("league_laliga", 0.82),
    ("league_serie_a", 0.75),
    ("league_ligue_1", 1.12),
    ("team_wanderers", 1.35),
    ("team_albion", 0.88),
];

pub fn rectangle_table(aspect: AspectRatio) -> &'static RectangleTable {
    match aspect {
        AspectRatio::Wide16x9 => &RECT_16X9,
        AspectRatio::Tall9x16 => &RECT_9X16,
        AspectRatio::Square1x1 => &RECT_1X1,
        AspectRatio::Portrait4x5 => &RECT_4X5,
    }
}

pub fn diamond_table(aspect: AspectRatio) -> &'static DiamondTable {
    match aspect {
        AspectRatio::Wide16x9 => &DIAMOND_16X9,
        AspectRatio::Tall9x16 => &DIAMOND_9X16,
        AspectRatio::Square1x1 => &DIAMOND_1X1,
        AspectRatio::Portrait4x5 => &DIAMOND_4X5,
    }
}

const RECT_16X9: RectangleTable = RectangleTable {
    center_shift: 0.332,
    logo_frac: 0.055,
    league_logo_frac: 0.055,
    icon_frac: 0.045,
    scoreboard: ScoreboardBoxes {
        home_logo: FracBox::new(0.050, 0.900, 0.085, 0.970),
        home_stripe: FracBox::new(0.085, 0.900, 0.095, 0.970),
        home_name: FracBox::new(0.095, 0.900, 0.155, 0.970),
        home_score: FracBox::new(0.155, 0.900, 0.185, 0.970),
        visiting_score: FracBox::new(0.185, 0.900, 0.215, 0.970),
        visiting_name: FracBox::new(0.215, 0.900, 0.275, 0.970),
        visiting_stripe: FracBox::new(0.275, 0.900, 0.285, 0.970),
        visiting_logo: FracBox::new(0.285, 0.900, 0.320, 0.970),
        league_logo: FracBox::new(0.320, 0.900, 0.355, 0.970),
        clock: FracBox::new(0.355, 0.900, 0.430, 0.970),
    },
    intro: IntroBoxes {
        league_label: FracBox::new(0.455, 0.420, 0.545, 0.475),
        home_name: FracBox::new(0.330, 0.485, 0.450, 0.540),
        visiting_name: FracBox::new(0.550, 0.485, 0.670, 0.540),
        home_logo: FracBox::new(0.355, 0.330, 0.425, 0.460),
        visiting_logo: FracBox::new(0.575, 0.330, 0.645, 0.460),
        home_stripe: FracBox::new(0.330, 0.545, 0.450, 0.560),
        visiting_stripe: FracBox::new(0.550, 0.545, 0.670, 0.560),
    },
    action: ActionBoxes {
        chip: FracBox::new(0.050, 0.800, 0.060, 0.875),
        player_icon: FracBox::new(0.060, 0.800, 0.090, 0.875),
        player_name: FracBox::new(0.090, 0.800, 0.165, 0.875),
        action_icon: FracBox::new(0.165, 0.800, 0.195, 0.875),
        message: FracBox::new(0.195, 0.800, 0.310, 0.875),
    },
};

const RECT_9X16: RectangleTable = RectangleTable {
    center_shift: 0.028,
    logo_frac: 0.032,
    league_logo_frac: 0.032,
    icon_frac: 0.026,
    scoreboard: ScoreboardBoxes {
        home_logo: FracBox::new(0.060, 0.840, 0.125, 0.880),
        home_stripe: FracBox::new(0.125, 0.840, 0.145, 0.880),
        home_name: FracBox::new(0.145, 0.840, 0.280, 0.880),
        home_score: FracBox::new(0.280, 0.840, 0.345, 0.880),
        visiting_score: FracBox::new(0.345, 0.840, 0.410, 0.880),
        visiting_name: FracBox::new(0.410, 0.840, 0.545, 0.880),
        visiting_stripe: FracBox::new(0.545, 0.840, 0.565, 0.880),
        visiting_logo: FracBox::new(0.565, 0.840, 0.630, 0.880),
        league_logo: FracBox::new(0.630, 0.840, 0.700, 0.880),
        clock: FracBox::new(0.700, 0.840, 0.870, 0.880),
    },
    intro: IntroBoxes {
        league_label: FracBox::new(0.400, 0.440, 0.600, 0.470),
        home_name: FracBox::new(0.150, 0.480, 0.450, 0.512),
        visiting_name: FracBox::new(0.550, 0.480, 0.850, 0.512),
        home_logo: FracBox::new(0.220, 0.360, 0.380, 0.440),
        visiting_logo: FracBox::new(0.620, 0.360, 0.780, 0.440),
        home_stripe: FracBox::new(0.150, 0.516, 0.450, 0.524),
        visiting_stripe: FracBox::new(0.550, 0.516, 0.850, 0.524),
    },
    action: ActionBoxes {
        chip: FracBox::new(0.060, 0.770, 0.080, 0.815),
        player_icon: FracBox::new(0.080, 0.770, 0.145, 0.815),
        player_name: FracBox::new(0.145, 0.770, 0.330, 0.815),
        action_icon: FracBox::new(0.330, 0.770, 0.395, 0.815),
        message: FracBox::new(0.395, 0.770, 0.660, 0.815),
    },
};

const RECT_1X1: RectangleTable = RectangleTable {
    center_shift: 0.190,
    logo_frac: 0.042,
    league_logo_frac: 0.042,
    icon_frac: 0.034,
    scoreboard: ScoreboardBoxes {
        home_logo: FracBox::new(0.055, 0.880, 0.105, 0.935),
        home_stripe: FracBox::new(0.105, 0.880, 0.120, 0.935),
        home_name: FracBox::new(0.120, 0.880, 0.215, 0.935),
        home_score: FracBox::new(0.215, 0.880, 0.260, 0.935),
        visiting_score: FracBox::new(0.260, 0.880, 0.305, 0.935),
        visiting_name: FracBox::new(0.305, 0.880, 0.400, 0.935),
        visiting_stripe: FracBox::new(0.400, 0.880, 0.415, 0.935),
        visiting_logo: FracBox::new(0.415, 0.880, 0.465, 0.935),
        league_logo: FracBox::new(0.465, 0.880, 0.515, 0.935),
        clock: FracBox::new(0.515, 0.880, 0.630, 0.935),
    },
    intro: IntroBoxes {
        league_label: FracBox::new(0.430, 0.430, 0.570, 0.472),
        home_name: FracBox::new(0.240, 0.482, 0.440, 0.525),
        visiting_name: FracBox::new(0.560, 0.482, 0.760, 0.525),
        home_logo: FracBox::new(0.280, 0.350, 0.400, 0.452),
        visiting_logo: FracBox::new(0.600, 0.350, 0.720, 0.452),
        home_stripe: FracBox::new(0.240, 0.530, 0.440, 0.541),
        visiting_stripe: FracBox::new(0.560, 0.530, 0.760, 0.541),
    },
    action: ActionBoxes {
        chip: FracBox::new(0.055, 0.800, 0.070, 0.856),
        player_icon: FracBox::new(0.070, 0.800, 0.118, 0.856),
        player_name: FracBox::new(0.118, 0.800, 0.250, 0.856),
        action_icon: FracBox::new(0.250, 0.800, 0.298, 0.856),
        message: FracBox::new(0.298, 0.800, 0.490, 0.856),
    },
};

const RECT_4X5: RectangleTable = RectangleTable {
    center_shift: 0.152,
    logo_frac: 0.038,
    league_logo_frac: 0.038,
    icon_frac: 0.030,
    scoreboard: ScoreboardBoxes {
        home_logo: FracBox::new(0.055, 0.870, 0.112, 0.922),
        home_stripe: FracBox::new(0.112, 0.870, 0.128, 0.922),
        home_name: FracBox::new(0.128, 0.870, 0.235, 0.922),
        home_score: FracBox::new(0.235, 0.870, 0.287, 0.922),
        visiting_score: FracBox::new(0.287, 0.870, 0.339, 0.922),
        visiting_name: FracBox::new(0.339, 0.870, 0.446, 0.922),
        visiting_stripe: FracBox::new(0.446, 0.870, 0.462, 0.922),
        visiting_logo: FracBox::new(0.462, 0.870, 0.519, 0.922),
        league_logo: FracBox::new(0.519, 0.870, 0.576, 0.922),
        clock: FracBox::new(0.576, 0.870, 0.700, 0.922),
    },
    intro: IntroBoxes {
        league_label: FracBox::new(0.420, 0.435, 0.580, 0.474),
        home_name: FracBox::new(0.215, 0.484, 0.435, 0.524),
        visiting_name: FracBox::new(0.565, 0.484, 0.785, 0.524),
        home_logo: FracBox::new(0.260, 0.355, 0.390, 0.454),
        visiting_logo: FracBox::new(0.610, 0.355, 0.740, 0.454),
        home_stripe: FracBox::new(0.215, 0.529, 0.435, 0.539),
        visiting_stripe: FracBox::new(0.565, 0.529, 0.785, 0.539),
    },
    action: ActionBoxes {
        chip: FracBox::new(0.055, 0.792, 0.072, 0.845),
        player_icon: FracBox::new(0.072, 0.792, 0.126, 0.845),
        player_name: FracBox::new(0.126, 0.792, 0.276, 0.845),
        action_icon: FracBox::new(0.276, 0.792, 0.330, 0.845),
        message: FracBox::new(0.330, 0.792, 0.545, 0.845),
    },
};

const DIAMOND_16X9: DiamondTable = DiamondTable {
    center_shift: 0.332,
    logo_frac: 0.050,
    league_logo_frac: 0.060,
    icon_frac: 0.045,
    badge_center: (0.130, 0.115),
    badge_half_frac: 0.075,
    block_h_frac: 0.048,
    name_w_frac: 0.085,
    score_w_frac: 0.028,
    stripe_w_frac: 0.007,
    intro_home_center: (0.360, 0.420),
    intro_visiting_center: (0.640, 0.420),
    intro_half_frac: 0.110,
    intro_label_band: (0.620, 0.675),
    action: ActionBoxes {
        chip: FracBox::new(0.050, 0.800, 0.060, 0.875),
        player_icon: FracBox::new(0.060, 0.800, 0.090, 0.875),
        player_name: FracBox::new(0.090, 0.800, 0.165, 0.875),
        action_icon: FracBox::new(0.165, 0.800, 0.195, 0.875),
        message: FracBox::new(0.195, 0.800, 0.310, 0.875),
    },
};

const DIAMOND_9X16: DiamondTable = DiamondTable {
    center_shift: 0.028,
    logo_frac: 0.030,
    league_logo_frac: 0.036,
    icon_frac: 0.026,
    badge_center: (0.200, 0.090),
    badge_half_frac: 0.048,
    block_h_frac: 0.030,
    name_w_frac: 0.180,
    score_w_frac: 0.060,
    stripe_w_frac: 0.014,
    intro_home_center: (0.300, 0.430),
    intro_visiting_center: (0.700, 0.430),
    intro_half_frac: 0.070,
    intro_label_band: (0.560, 0.595),
    action: ActionBoxes {
        chip: FracBox::new(0.060, 0.770, 0.080, 0.815),
        player_icon: FracBox::new(0.080, 0.770, 0.145, 0.815),
        player_name: FracBox::new(0.145, 0.770, 0.330, 0.815),
        action_icon: FracBox::new(0.330, 0.770, 0.395, 0.815),
        message: FracBox::new(0.395, 0.770, 0.660, 0.815),
    },
};

const DIAMOND_1X1: DiamondTable = DiamondTable {
    center_shift: 0.190,
    logo_frac: 0.040,
    league_logo_frac: 0.048,
    icon_frac: 0.034,
    badge_center: (0.160, 0.105),
    badge_half_frac: 0.060,
    block_h_frac: 0.038,
    name_w_frac: 0.130,
    score_w_frac: 0.042,
    stripe_w_frac: 0.010,
    intro_home_center: (0.330, 0.425),
    intro_visiting_center: (0.670, 0.425),
    intro_half_frac: 0.090,
    intro_label_band: (0.590, 0.635),
    action: ActionBoxes {
        chip: FracBox::new(0.055, 0.800, 0.070, 0.856),
        player_icon: FracBox::new(0.070, 0.800, 0.118, 0.856),
        player_name: FracBox::new(0.118, 0.800, 0.250, 0.856),
        action_icon: FracBox::new(0.250, 0.800, 0.298, 0.856),
        message: FracBox::new(0.298, 0.800, 0.490, 0.856),
    },
};

const DIAMOND_4X5: DiamondTable = DiamondTable {
    center_shift: 0.152,
    logo_frac: 0.036,
    league_logo_frac: 0.044,
    icon_frac: 0.030,
    badge_center: (0.170, 0.100),
    badge_half_frac: 0.055,
    block_h_frac: 0.034,
    name_w_frac: 0.145,
    score_w_frac: 0.048,
    stripe_w_frac: 0.011,
    intro_home_center: (0.320, 0.428),
    intro_visiting_center: (0.680, 0.428),
    intro_half_frac: 0.082,
    intro_label_band: (0.578, 0.618),
    action: ActionBoxes {
        chip: FracBox::new(0.055, 0.792, 0.072, 0.845),
        player_icon: FracBox::new(0.072, 0.792, 0.126, 0.845),
        player_name: FracBox::new(0.126, 0.792, 0.276, 0.845),
        action_icon: FracBox::new(0.276, 0.792, 0.330, 0.845),
        message: FracBox::new(0.330, 0.792, 0.545, 0.845),
    },
};
