use serde::Serialize;

use super::BodyId;

/// Static text of a body's information panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyFacts {
    pub title: &'static str,
    /// `(label, value)` rows, in display order.
    pub facts: &'static [(&'static str, &'static str)],
    /// Closing paragraph; empty for bodies without one.
    pub blurb: &'static str,
}

/// Panel content for `id`. The intro page has no panel.
pub fn facts_for(id: BodyId) -> Option<BodyFacts> {
    let facts = match id {
        BodyId::Intro => return None,
        BodyId::Sun => BodyFacts {
            title: "Sun Information",
            facts: &[
                ("Diameter", "1,391,000 km"),
                ("Mass", "1.989 × 10^30 kg"),
                ("Volume", "1.41 × 10^18 cubic kilometers"),
                ("Average Distance from the Earth", "149.6 million km"),
                ("Temperature at the Core", "Approximately 15 million °C"),
            ],
            blurb: "The Sun is the star at the center of our solar system. It provides light and \
                    heat, making life possible on Earth. The Sun is a massive, hot ball of gas, \
                    primarily composed of hydrogen and helium.",
        },
        BodyId::Mercury => BodyFacts {
            title: "Mercury Information",
            facts: &[
                ("Average Temperature", "427°C (800°F) during the day, -183°C (-297°F) at night"),
                ("Size", "Diameter of approximately 4,880 kilometers (3,032 miles)"),
                ("Distance from the Sun", "Approximately 57.9 million kilometers (36 million miles)"),
                ("Orbital Period", "About 88 Earth days"),
                ("Rotation Period", "About 59 Earth days"),
            ],
            blurb: "",
        },
        BodyId::Venus => BodyFacts {
            title: "Venus Information",
            facts: &[
                ("Average Temperature", "465°C (869°F)"),
                ("Size", "Diameter of approximately 12,104 kilometers (7,521 miles)"),
                (
                    "Distance from the Sun",
                    "Approximately 108.2 million kilometers (67.2 million miles)",
                ),
                ("Orbital Period", "About 225 Earth days"),
                ("Rotation Period", "About 243 Earth days (retrograde rotation)"),
            ],
            blurb: "",
        },
        BodyId::Earth => BodyFacts {
            title: "Earth Information",
            facts: &[
                ("Average Temperature", "15°C (59°F)"),
                ("Size", "Diameter of approximately 12,742 kilometers (7,918 miles)"),
                (
                    "Distance from the Sun",
                    "Approximately 149.6 million kilometers (93 million miles)",
                ),
                ("Orbital Period", "About 365.25 Earth days"),
                ("Rotation Period", "About 24 hours"),
            ],
            blurb: "Earth is the third planet from the Sun and the only astronomical object known \
                    to harbor life. It is often referred to as the \"Blue Planet\" due to its \
                    abundant water resources.",
        },
        BodyId::Mars => BodyFacts {
            title: "Mars Information",
            facts: &[
                ("Average Temperature", "-80°F (-62°C)"),
                ("Size", "Diameter of approximately 6,779 kilometers (4,212 miles)"),
                (
                    "Distance from the Sun",
                    "Approximately 227.9 million kilometers (141.6 million miles)",
                ),
                ("Orbital Period", "About 687 Earth days"),
                ("Rotation Period", "About 24.6 hours"),
            ],
            blurb: "Mars is the fourth planet from the Sun and the second-smallest planet in the \
                    Solar System. It is often referred to as the \"Red Planet\" due to its \
                    reddish appearance.",
        },
        BodyId::Jupiter => BodyFacts {
            title: "Jupiter Information",
            facts: &[
                ("Diameter", "139,820 km"),
                ("Mass", "1.898 × 10^27 kg"),
                ("Volume", "1.4313 × 10^15 cubic kilometers"),
                ("Average Distance from the Sun", "778 million km"),
                ("Orbital Period", "11.86 Earth years"),
                ("Day Length", "About 9.9 Earth hours"),
                ("Average Temperature", "Approximately -145°C"),
            ],
            blurb: "Jupiter is the largest planet in our Solar System. It is a gas giant and is \
                    known for its prominent bands of clouds and the Great Red Spot.",
        },
        BodyId::Saturn => BodyFacts {
            title: "Saturn Information",
            facts: &[
                ("Diameter", "116,464 km"),
                ("Mass", "5.683 × 10^26 kg"),
                ("Distance from the Sun", "1.42 billion km"),
                ("Rotation Period", "About 10.5 hours"),
                ("Orbital Period", "About 29.5 Earth years"),
                ("Average Temperature", "Approximately -178 °C"),
            ],
            blurb: "Saturn is the sixth planet from the Sun and the second-largest in the Solar \
                    System, after Jupiter. It is known for its stunning ring system.",
        },
        BodyId::Uranus => BodyFacts {
            title: "Uranus Information",
            facts: &[
                ("Diameter", "50,724 km"),
                ("Mass", "8.681 × 10^25 kg"),
                ("Distance from the Sun", "2.87 billion km"),
                ("Rotation Period", "About 17.24 hours"),
                ("Orbital Period", "About 84 Earth years"),
                ("Average Temperature", "Approximately -224 °C"),
            ],
            blurb: "Uranus is the seventh planet from the Sun in the Solar System. It is a gas \
                    giant with an atmosphere composed primarily of hydrogen, helium, and methane.",
        },
        BodyId::Neptune => BodyFacts {
            title: "Neptune Information",
            facts: &[
                ("Diameter", "49,244 km"),
                ("Mass", "1.024 × 10^26 kg"),
                ("Distance from the Sun", "4.5 billion km"),
                ("Rotation Period", "About 16.11 hours"),
                ("Orbital Period", "About 165 Earth years"),
            ],
            blurb: "Neptune is the eighth and farthest-known planet from the Sun in the Solar \
                    System. It is the fourth-largest planet by diameter and the third-largest by \
                    mass.",
        },
        BodyId::Pluto => BodyFacts {
            title: "Pluto Information",
            facts: &[
                ("Diameter", "2376 km"),
                ("Mass", "1.303 × 10^22 kg"),
                ("Distance from the Sun", "Approximately 5.9 billion km"),
                ("Rotation Period", "About 6.4 Earth days"),
                ("Orbital Period", "About 248 Earth years"),
            ],
            blurb: "Pluto is a dwarf planet in our solar system, located in the Kuiper belt. It \
                    was discovered in 1930 and considered the ninth planet until reclassified in \
                    2006 by the International Astronomical Union (IAU).",
        },
    };
    Some(facts)
}
