use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct Statistic {
    value: u32, // the page animates a counter from 0 up to this value
    suffix: &'static str,
    label: &'static str,
}

#[derive(Serialize)]
pub struct HomeSection {
    id: &'static str,
    title: &'static str,
    paragraphs: Vec<&'static str>,
}

#[derive(Serialize)]
pub struct HomeResponse {
    statistics: Vec<Statistic>,
    sections: Vec<HomeSection>,
}

pub fn home_content() -> HomeResponse {
    HomeResponse {
        statistics: vec![
            Statistic { value: 1994, suffix: "", label: "Year of establishment" },
            Statistic { value: 500, suffix: "+", label: "Of customers worldwide" },
            Statistic { value: 10, suffix: "+", label: "Countries with active client base" },
            Statistic { value: 50, suffix: "", label: "International Partners" },
        ],
        sections: vec![
            HomeSection {
                id: "mission",
                title: "Mission / Vision",
                paragraphs: vec![
                    "Our mission is to deliver advanced and innovative ICT services and solutions tailored to our customers' needs. We aim to excel in various domains, including IT Infrastructure, IT Security, Data Center, Cloud Computing, Internet of Things and Artificial Intelligence.",
                    "We aspire to be a premier ICT solution provider, leading the way in the new digital era by leveraging cutting-edge technologies within the region.",
                ],
            },
            HomeSection {
                id: "values",
                title: "Values",
                paragraphs: vec![
                    "At the core of our company are the principles that guide every interaction and decision: Respect for individuals and ideas, Equality in opportunity and collaboration, open and honest Communication, unwavering Ethics, and a commitment to Professionalism in all we do.",
                ],
            },
            HomeSection {
                id: "glance",
                title: "At a glance",
                paragraphs: vec![
                    "Triple C is a leading IT solutions provider, delivering tailor-made services to meet the unique needs of every client. We specialize in Networking, IT Infrastructure, Cybersecurity, IP Telephony, Systems, Servers, Storage and other IT solutions.",
                    "We offer comprehensive managed services, backed by world-class technologies from globally recognized vendors. As a premier Fortinet Training Partner, we also provide top-tier cybersecurity training to empower your teams.",
                    "With a client-centric approach, we ensure that every solution is optimized for performance, security, and scalability.",
                ],
            },
        ],
    }
}

pub async fn get_home() -> Json<HomeResponse> {
    Json(home_content())
}
