/// Static page chrome: header, about blurb and footer contact details.
#[derive(Debug, Clone)]
pub struct SiteProfile {
    pub short_name: &'static str,
    pub full_name: &'static str,
    pub tagline: &'static str,
    pub about: &'static str,
    pub logo: &'static str,
    pub background: &'static str,
    pub form_banner: &'static str,
    pub socials: Vec<SocialLink>,
    pub emails: Vec<&'static str>,
    pub phones: Vec<Phone>,
    pub headquarters: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone)]
pub struct Phone {
    pub display: &'static str,
    pub dial: &'static str,
}

impl SiteProfile {
    pub fn gaanet() -> Self {
        Self {
            short_name: "GAANET",
            full_name: "Global Access Apostolic Network International",
            tagline: "Building Structure, Building People and Building Nations.",
            about: "is a powerful network of ministers and ministries that are moving in the power \
                    of the Spirit, encouraging and supporting one another and building the Kingdom \
                    of God under a protective, supportive and nurturing covering.",
            logo: "/logo.png",
            background: "/background-img.jpg",
            form_banner: "/ganet.jpg",
            socials: vec![
                SocialLink { label: "Facebook", url: "https://facebook.com/GAANETI" },
                SocialLink { label: "Instagram", url: "https://instagram.com/gaaneti" },
                SocialLink { label: "Twitter", url: "https://x.com/gaanet1" },
                SocialLink { label: "Threads", url: "https://threads.com/gaaneti" },
                SocialLink { label: "YouTube", url: "https://youtube.com/@GAANETI" },
            ],
            emails: vec!["info@gaanet.org", "secreteriat@gaanet.org"],
            phones: vec![
                Phone { display: "+234 803 318 3107", dial: "+2348033183107" },
                Phone { display: "+234 803 474 6173", dial: "+2348034746173" },
                Phone { display: "+234 813 112 9234", dial: "+2348131129234" },
                Phone { display: "+234 807 269 7533", dial: "+2348072697533" },
                Phone { display: "+234 905 455 1723", dial: "+2349054551723" },
            ],
            headquarters: vec![
                "The Home-Builders Christian Centre,",
                "Gilgal City Shepherds Hill, 1-5 Iyesi Road, IYESI,",
                "Off Oko-Afo Bus stop, Iyesi Bale, Ilogbo-Eremi,",
                "Badagry LGA, Lagos State, Nigeria.",
            ],
        }
    }
}
