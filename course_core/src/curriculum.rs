//! # Course Curriculum
//!
//! The fixed 10-week "Advanced AI Video Making" programme: weekly titles,
//! sessions, deliverables, the batch timetable and community channels.
//!
//! Each week has three 2.5-hour weeknight classes and one 6-hour Sunday
//! intensive, for 13.5 hours a week and 135 hours overall.

use serde::Serialize;

use crate::plan::CYCLE_DURATION_MONTHS;

/// Course title shown in the header and on the report
pub const COURSE_TITLE: &str = "Advanced AI Video Making";

/// Course length in weeks
pub const COURSE_WEEKS: u32 = 10;

/// Hours of a weeknight class
pub const WEEKNIGHT_SESSION_HOURS: f64 = 2.5;

/// Hours of a Sunday intensive
pub const SUNDAY_INTENSIVE_HOURS: f64 = 6.0;

/// One class within a week
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Session {
    /// "Day 1", "Day 2", "Day 3" or "Sun"
    pub day: &'static str,
    pub topic: &'static str,
    pub duration_hours: f64,
}

impl Session {
    const fn weeknight(day: &'static str, topic: &'static str) -> Self {
        Session { day, topic, duration_hours: WEEKNIGHT_SESSION_HOURS }
    }

    const fn intensive(topic: &'static str) -> Self {
        Session { day: "Sun", topic, duration_hours: SUNDAY_INTENSIVE_HOURS }
    }

    /// Duration label, e.g. `2.5h`
    pub fn duration_label(&self) -> String {
        format!("{}h", self.duration_hours)
    }
}

/// One week of the course
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Week {
    pub number: u32,
    pub title: &'static str,
    /// Advertised hours for the week
    pub hours: f64,
    pub sessions: [Session; 4],
    pub deliverables: &'static [&'static str],
}

impl Week {
    /// Sum of the session durations
    pub fn session_hours(&self) -> f64 {
        self.sessions.iter().map(|s| s.duration_hours).sum()
    }
}

const WEEKS: [Week; 10] = [
    Week {
        number: 1,
        title: "Foundation & AI Storytelling",
        hours: 13.5,
        sessions: [
            Session::weeknight("Day 1", "AI Film Making Revolution + Story Development with ChatGPT"),
            Session::weeknight("Day 2", "Cinematography Fundamentals + Visual Storytelling"),
            Session::weeknight("Day 3", "Script to Screen: Complete Screenplay Development"),
            Session::intensive("INTENSIVE: Complete Script + Storyboard Creation Workshop"),
        ],
        deliverables: &[
            "Complete 5-10 min script",
            "Full storyboard (25+ frames)",
            "Shot list with camera angles",
        ],
    },
    Week {
        number: 2,
        title: "AI Image Generation Mastery",
        hours: 13.5,
        sessions: [
            Session::weeknight("Day 1", "Midjourney Pro: Character Design & Consistency"),
            Session::weeknight("Day 2", "Leonardo AI + Stable Diffusion: Backgrounds & Environments"),
            Session::weeknight("Day 3", "Advanced Prompting + Image Upscaling to 4K"),
            Session::intensive("INTENSIVE: Complete Visual Asset Library Creation"),
        ],
        deliverables: &[
            "3-5 character designs (multiple angles)",
            "15+ location/background images",
            "Props and detail shots",
        ],
    },
    Week {
        number: 3,
        title: "Bringing Images to Life",
        hours: 13.5,
        sessions: [
            Session::weeknight("Day 1", "Runway Gen-3: Image to Video Magic"),
            Session::weeknight("Day 2", "Pika Labs + Sora: Advanced Video Generation"),
            Session::weeknight("Day 3", "Motion Control + Camera Movement Techniques"),
            Session::intensive("INTENSIVE: Convert All Storyboard Images to Video Clips"),
        ],
        deliverables: &[
            "20+ video clips (3-10 sec each)",
            "B-roll footage library",
            "Establishing shots",
        ],
    },
    Week {
        number: 4,
        title: "Character Animation & Lip Sync",
        hours: 13.5,
        sessions: [
            Session::weeknight("Day 1", "Google Colab: Sadtalker Setup & Basic Animation"),
            Session::weeknight("Day 2", "Wav2Lip: Perfect Lip Sync Techniques"),
            Session::weeknight("Day 3", "D-ID & HeyGen: Professional Talking Heads"),
            Session::intensive("INTENSIVE: Animate All Character Dialogue Scenes"),
        ],
        deliverables: &[
            "All dialogue scenes animated",
            "Facial expressions library",
            "Character performance shots",
        ],
    },
    Week {
        number: 5,
        title: "Voice & Sound Design",
        hours: 13.5,
        sessions: [
            Session::weeknight("Day 1", "ElevenLabs: Voice Cloning & Character Voices"),
            Session::weeknight("Day 2", "Voice Direction + Audacity Audio Editing"),
            Session::weeknight("Day 3", "Suno AI Music + Sound Effects Creation"),
            Session::intensive("INTENSIVE: Complete Audio Track Production"),
        ],
        deliverables: &[
            "All dialogue audio recorded/generated",
            "Custom background music",
            "Complete sound effects library",
        ],
    },
    Week {
        number: 6,
        title: "Video Editing Foundation",
        hours: 13.5,
        sessions: [
            Session::weeknight("Day 1", "DaVinci Resolve: Interface & Basic Editing"),
            Session::weeknight("Day 2", "Advanced Cuts, Transitions & Pacing"),
            Session::weeknight("Day 3", "Descript: Text-Based Editing Workflow"),
            Session::intensive("INTENSIVE: Rough Cut Assembly of Entire Film"),
        ],
        deliverables: &[
            "Complete rough cut (no color/sound mix)",
            "Pacing finalized",
            "All scenes sequenced",
        ],
    },
    Week {
        number: 7,
        title: "Color Grading & Visual Effects",
        hours: 13.5,
        sessions: [
            Session::weeknight("Day 1", "Color Theory + DaVinci Color Wheels"),
            Session::weeknight("Day 2", "LUTs, Mood Creation & Shot Matching"),
            Session::weeknight("Day 3", "Topaz Video AI: Upscaling & Enhancement"),
            Session::intensive("INTENSIVE: Color Grade Entire Film + VFX Polish"),
        ],
        deliverables: &[
            "Film color graded with consistent look",
            "All shots upscaled to 4K",
            "VFX shots completed",
        ],
    },
    Week {
        number: 8,
        title: "Motion Graphics & Final Polish",
        hours: 13.5,
        sessions: [
            Session::weeknight("Day 1", "Title Sequences & Animated Graphics"),
            Session::weeknight("Day 2", "Lower Thirds, Credits & Text Animation"),
            Session::weeknight("Day 3", "Sound Mixing & Audio Mastering"),
            Session::intensive("INTENSIVE: Final Mix, Master & Export"),
        ],
        deliverables: &[
            "Opening title sequence",
            "End credits animated",
            "Final film master copy (4K)",
        ],
    },
    Week {
        number: 9,
        title: "Distribution & Marketing",
        hours: 13.5,
        sessions: [
            Session::weeknight("Day 1", "YouTube Optimization: Thumbnails, SEO, Shorts"),
            Session::weeknight("Day 2", "Instagram/TikTok Strategy + Promotional Content"),
            Session::weeknight("Day 3", "Film Festivals + Portfolio Building"),
            Session::intensive("INTENSIVE: Create Complete Marketing Package"),
        ],
        deliverables: &[
            "5 custom thumbnails",
            "10 promotional reels",
            "Festival submission package",
            "Portfolio website",
        ],
    },
    Week {
        number: 10,
        title: "Business & Career Launch",
        hours: 13.5,
        sessions: [
            Session::weeknight("Day 1", "Freelancing Setup: Services, Pricing, Platforms"),
            Session::weeknight("Day 2", "Building Content Business + Monetization"),
            Session::weeknight("Day 3", "Future of AI Filmmaking + Continuous Learning"),
            Session::intensive("FILM PREMIERE + CERTIFICATION CEREMONY"),
        ],
        deliverables: &[
            "Freelancer profiles live",
            "6-month business plan",
            "Final film premiere",
            "Certificate received",
        ],
    },
];

/// All weeks in order
pub fn weeks() -> &'static [Week] {
    &WEEKS
}

/// Look up a week by its 1-based number
pub fn week(number: u32) -> Option<&'static Week> {
    WEEKS.iter().find(|w| w.number == number)
}

/// Total advertised course hours
pub fn total_hours() -> f64 {
    WEEKS.iter().map(|w| w.hours).sum()
}

/// Headline facts about the course
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Course {
    pub title: &'static str,
    pub weeks: u32,
    pub duration_months: f64,
    pub total_hours: f64,
}

impl Course {
    /// Duration label, e.g. `10 Weeks (2.5 Months)`
    pub fn duration_label(&self) -> String {
        format!("{} Weeks ({} Months)", self.weeks, self.duration_months)
    }
}

/// The course this catalogue describes
pub fn course() -> Course {
    Course {
        title: COURSE_TITLE,
        weeks: COURSE_WEEKS,
        duration_months: CYCLE_DURATION_MONTHS,
        total_hours: total_hours(),
    }
}

// ============================================================================
// Timetable
// ============================================================================

/// A recurring weeknight class slot for one batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchSlot {
    /// "Batch A", "Batch B"
    pub batch: &'static str,
    pub days: &'static str,
    pub time: &'static str,
}

const BATCH_SLOTS: [BatchSlot; 2] = [
    BatchSlot { batch: "Batch A", days: "Mon, Wed, Fri", time: "7:00-9:30 PM" },
    BatchSlot { batch: "Batch B", days: "Tue, Thu, Sat", time: "7:00-9:30 PM" },
];

/// Sunday intensive timing, shared by all batches
pub const SUNDAY_INTENSIVE_SLOT: &str = "Every Sunday: 10:00 AM - 5:00 PM";

/// Weeknight slots to show for a given number of parallel batches.
///
/// A single batch runs Mon/Wed/Fri; with more than one batch the second
/// slot (Tue/Thu/Sat) is used as well.
pub fn weeknight_slots(batch_count: u32) -> &'static [BatchSlot] {
    if batch_count > 1 {
        &BATCH_SLOTS
    } else {
        &BATCH_SLOTS[..1]
    }
}

// ============================================================================
// Community
// ============================================================================

/// A student support channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommunityChannel {
    pub name: &'static str,
    pub description: &'static str,
}

const COMMUNITY_CHANNELS: [CommunityChannel; 2] = [
    CommunityChannel {
        name: "WhatsApp Groups",
        description: "Direct access to mentors and peers for real-time collaboration and troubleshooting.",
    },
    CommunityChannel {
        name: "Google Classroom",
        description: "A central repository for session recordings, handouts, and AI prompt libraries.",
    },
];

/// Support channels offered to enrolled students
pub fn community_channels() -> &'static [CommunityChannel] {
    &COMMUNITY_CHANNELS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_weeks_in_order() {
        let all = weeks();
        assert_eq!(all.len() as u32, COURSE_WEEKS);
        for (i, w) in all.iter().enumerate() {
            assert_eq!(w.number as usize, i + 1);
        }
    }

    #[test]
    fn test_hours_add_up() {
        assert_eq!(total_hours(), 135.0);
        for w in weeks() {
            assert_eq!(w.session_hours(), w.hours, "week {} hours mismatch", w.number);
        }
    }

    #[test]
    fn test_every_week_has_deliverables_and_intensive() {
        for w in weeks() {
            assert!(w.deliverables.len() >= 3);
            assert_eq!(w.sessions[3].day, "Sun");
            assert_eq!(w.sessions[3].duration_label(), "6h");
        }
    }

    #[test]
    fn test_course_metadata() {
        let c = course();
        assert_eq!(c.title, "Advanced AI Video Making");
        assert_eq!(c.weeks as usize, weeks().len());
        assert_eq!(c.total_hours, 135.0);
        assert_eq!(c.duration_label(), "10 Weeks (2.5 Months)");
    }

    #[test]
    fn test_week_lookup() {
        assert_eq!(week(4).map(|w| w.title), Some("Character Animation & Lip Sync"));
        assert!(week(0).is_none());
        assert!(week(11).is_none());
    }

    #[test]
    fn test_weeknight_slots_follow_batch_count() {
        assert_eq!(weeknight_slots(1).len(), 1);
        assert_eq!(weeknight_slots(1)[0].days, "Mon, Wed, Fri");
        assert_eq!(weeknight_slots(2).len(), 2);
        assert_eq!(weeknight_slots(5)[1].batch, "Batch B");
    }

    #[test]
    fn test_community_channels() {
        let names: Vec<_> = community_channels().iter().map(|c| c.name).collect();
        assert_eq!(names, ["WhatsApp Groups", "Google Classroom"]);
    }
}
