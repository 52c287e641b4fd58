//! Knowledge base snapshot types.
//!
//! The knowledge base is an immutable snapshot of the site owner's profile,
//! services, skills, portfolio, and work history. It is constructed once at
//! startup (or received over the wire from a client) and never mutated.
//! Every list preserves authored order -- answer numbering and concatenation
//! depend on it.

use serde::{Deserialize, Serialize};

/// Profile attributes of the site owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutProfile {
    pub name: String,
    pub profession: String,
    pub description: String,
    pub birthday: String,
    pub age: u32,
    pub phone: String,
    pub email: String,
    pub city: String,
    pub address: String,
    /// Freelance availability, e.g. "Available".
    pub freelance: String,
}

/// A single service offering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub name: String,
    pub description: String,
}

/// A named group of skills.
///
/// The label carries its authored display prefix (emoji included) so answer
/// templates can interpolate it verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub label: String,
    pub items: Vec<String>,
}

/// One entry in the work history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub period: String,
    pub location: String,
    pub role: String,
}

/// Immutable knowledge base snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub about: AboutProfile,
    pub services: Vec<ServiceOffering>,
    pub skills: Vec<SkillCategory>,
    /// Portfolio project names, in authored order.
    pub portfolio: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
}

impl KnowledgeBase {
    /// The knowledge base shipped with the binary, extracted from the
    /// published site content. Used whenever a client does not supply its
    /// own snapshot.
    pub fn builtin() -> Self {
        Self {
            about: AboutProfile {
                name: "Sebai Houssem".to_string(),
                profession: "Multimedia professional specializing in design, photography, \
                             videography, and photo editing"
                    .to_string(),
                description: "Creative and detail-oriented, I excel at producing high-quality \
                              visual content that effectively communicates ideas and \
                              strengthens brand identity. Passionate about innovation and \
                              continuous improvement, I combine strong technical expertise \
                              with artistic vision to deliver impactful, professional, and \
                              visually engaging results."
                    .to_string(),
                birthday: "29 May 2001".to_string(),
                age: 24,
                phone: "+216 21 988 631".to_string(),
                email: "sebaihoussem11@gmail.com".to_string(),
                city: "Tunis, Tunisia".to_string(),
                address: "Tunis, Tunisia Les Berge du Lac1 1053".to_string(),
                freelance: "Available".to_string(),
            },
            services: vec![
                ServiceOffering {
                    name: "Brand Identity & Logo Design".to_string(),
                    description: "I personally develop complete brand identities and logos \
                                  that align with your vision and enhance your market presence."
                        .to_string(),
                },
                ServiceOffering {
                    name: "Graphic Design for Marketing Collateral".to_string(),
                    description: "I create compelling and professional visual assets for all \
                                  your marketing needs, including social media, print, and \
                                  billboards."
                        .to_string(),
                },
                ServiceOffering {
                    name: "Complete Videography & Editing".to_string(),
                    description: "I handle the entire video workflow, from initial \
                                  scriptwriting and storyboarding to shooting, editing, \
                                  storytelling, and professional color grading (Log/RAW \
                                  workflows)."
                        .to_string(),
                },
                ServiceOffering {
                    name: "Photography & Image Retouching".to_string(),
                    description: "I offer high-quality professional photography services and \
                                  use expert image retouching and photo editing to ensure a \
                                  polished final product."
                        .to_string(),
                },
                ServiceOffering {
                    name: "Motion Graphics & Animation".to_string(),
                    description: "I produce dynamic animated graphics and title sequences to \
                                  make your videos and digital content more engaging and \
                                  impactful."
                        .to_string(),
                },
                ServiceOffering {
                    name: "Print File Preparation & Quality Control".to_string(),
                    description: "I ensure your design files are correctly prepared for \
                                  professional printing, including quality control and print \
                                  monitoring."
                        .to_string(),
                },
            ],
            skills: vec![
                SkillCategory {
                    label: "\u{1F3A8} Graphic Design".to_string(),
                    items: vec![
                        "Brand Identity & Logo Design".to_string(),
                        "Marketing Collateral (Social Media, Print, Billboards)".to_string(),
                        "UI/UX Basics".to_string(),
                        "Typography & Layout".to_string(),
                    ],
                },
                SkillCategory {
                    label: "\u{1F4F8} Photography".to_string(),
                    items: vec![
                        "Studio Lighting & Composition".to_string(),
                        "High-end Retouching & Manipulation".to_string(),
                        "Product, Event, & Portrait Photography".to_string(),
                    ],
                },
                SkillCategory {
                    label: "\u{1F3AC} Videography".to_string(),
                    items: vec![
                        "Video Editing & Storytelling".to_string(),
                        "Color Grading (Log/RAW workflows)".to_string(),
                        "Motion Graphics & Title Animation".to_string(),
                        "Scriptwriting & Storyboarding".to_string(),
                    ],
                },
                SkillCategory {
                    label: "\u{1F4BB} Software".to_string(),
                    items: vec![
                        "Adobe Creative Cloud: Photoshop, Illustrator, InDesign, Premiere \
                         Pro, After Effects, Lightroom"
                            .to_string(),
                        "Other: DaVinci Resolve (Color), Figma (Design), Capture One"
                            .to_string(),
                    ],
                },
            ],
            portfolio: vec![
                "Posters Collection".to_string(),
                "Moly Night Bar".to_string(),
                "Aura Clothing".to_string(),
                "Illustration Gallery".to_string(),
            ],
            experience: vec![
                ExperienceEntry {
                    company: "CJ Studio".to_string(),
                    period: "2025-09 to 2025-05".to_string(),
                    location: "Laouina, Tunis, Tunisia, 2045".to_string(),
                    role: "Internship - videography, video editing, photography, and image \
                           retouching"
                        .to_string(),
                },
                ExperienceEntry {
                    company: "Asnopub".to_string(),
                    period: "Oct 2021 - Jul 2023".to_string(),
                    location: "Avenue Farhat Hached, Morneg 2090, Tunis".to_string(),
                    role: "Internship in printing - file preparation, print monitoring, and \
                           quality control"
                        .to_string(),
                },
                ExperienceEntry {
                    company: "Travel Center".to_string(),
                    period: "2020-09 to 2021-05".to_string(),
                    location: "Centre Nawrez, Bloc B 2-1, Rue du Lac Lémon, Les Berges du \
                               Lac, Tunis"
                        .to_string(),
                    role: "Internship - media videographer and designer".to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_six_services_in_authored_order() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.services.len(), 6);
        assert_eq!(kb.services[0].name, "Brand Identity & Logo Design");
        assert_eq!(
            kb.services[5].name,
            "Print File Preparation & Quality Control"
        );
    }

    #[test]
    fn builtin_contact_fields_present() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.about.email, "sebaihoussem11@gmail.com");
        assert_eq!(kb.about.phone, "+216 21 988 631");
        assert!(!kb.about.address.is_empty());
    }

    #[test]
    fn builtin_serde_roundtrip() {
        let kb = KnowledgeBase::builtin();
        let json = serde_json::to_string(&kb).unwrap();
        let parsed: KnowledgeBase = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.services.len(), kb.services.len());
        assert_eq!(parsed.portfolio, kb.portfolio);
        assert_eq!(parsed.skills[0].label, kb.skills[0].label);
    }

    #[test]
    fn skill_labels_carry_display_prefix() {
        let kb = KnowledgeBase::builtin();
        assert!(kb.skills[0].label.ends_with("Graphic Design"));
        assert_eq!(kb.skills.len(), 4);
    }
}
