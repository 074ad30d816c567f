//! Static site copy: artist profile, exhibition history, press and the
//! artwork catalog source.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Catalog source: one image file name per line, `title│size│medium│year.ext`.
pub const CATALOG_TEXT: &str = include_str!("../assets/catalog.txt");

#[derive(Clone, Copy, Debug)]
pub struct ArtistInfo {
    pub name: &'static str,
    pub eng_name: &'static str,
    pub philosophy: &'static str,
    pub bio: &'static str,
    pub email: &'static str,
    pub naver_profile: &'static str,
    pub address: &'static str,
    pub instagram_url: &'static str,
    pub instagram_id: &'static str,
}

pub const ARTIST: ArtistInfo = ArtistInfo {
    name: "신은영",
    eng_name: "Shin Eun Young",
    philosophy: "틈과 틈 사이에 서서, 보이지 않는 울림을 그리다.",
    bio: "21회의 개인전과 수많은 단체전을 통해 자신만의 독창적인 예술 세계를 구축해왔습니다. \
          '틈', '달팽이의 꿈' 등 서정적이고 추상적인 주제를 통해 현대인에게 위로와 성찰의 시간을 선사합니다.",
    email: "seyart@naver.com",
    naver_profile: "https://search.naver.com/search.naver?where=nexearch&sm=tab_etc&mra=bjky&pkid=1&os=33617600&qvt=0&query=%EC%9E%91%EA%B0%80%20%EC%8B%A0%EC%9D%80%EC%98%81",
    address: "경기도 남양주시 화도읍 북한강로 1512 (아르템갤러리)",
    instagram_url: "https://instagram.com/eunyoung2164",
    instagram_id: "@eunyoung2164",
};

pub const AFFILIATIONS: [&str; 3] = ["청색회 사무국장", "한국미술전업작가협회 이사", "한국미술협회 서양화 1분과 이사"];

pub const ACTIVITIES: [&str; 3] = ["서울아카데미회", "서울미술협회", "중랑미술협회"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Exhibition {
    pub year: &'static str,
    pub title: &'static str,
}

pub const SOLO_EXHIBITIONS: &[Exhibition] = &[
    Exhibition { year: "2025", title: "충청각 개인전" },
    Exhibition { year: "2024", title: "인사동 인사아트센터 개인전" },
    Exhibition { year: "2024", title: "예인갤러리 초대개인전" },
    Exhibition { year: "2024", title: "안녕 인사동 아트플러스갤러리 초대개인전" },
    Exhibition { year: "2023", title: "파주 한빛중학교 초대개인전" },
    Exhibition { year: "2023", title: "춘천 갤러리 오르 초대개인전" },
    Exhibition { year: "2022", title: "혜화 마로니에 갤러리 초대개인전" },
    Exhibition { year: "2022", title: "충무로 아르템갤러리 초대개인전" },
    Exhibition { year: "2021", title: "오늘제빵소카페 갤러리 초대개인전" },
    Exhibition { year: "2020", title: "인사동 라메르 갤러리 '틈과 틈 사이에 서서'" },
    Exhibition { year: "2019", title: "인사동 조형갤러리 '틈' 개인전" },
    Exhibition { year: "2018", title: "부산시설공단 갤러리 '달팽이의 꿈'" },
    Exhibition { year: "2017", title: "서울시립미술관 경희궁 분관 개인전" },
    Exhibition { year: "2016", title: "뉴욕 아트모라 갤러리 초대전" },
    Exhibition { year: "2015", title: "가나인사아트센터 개인전" },
];

/// TV dramas that featured the artist's works.
pub const DRAMA_WORKS: &[&str] = &["진짜가 나타났다!", "우아한 제국", "황금가면", "빨강구두", "누가 뭐래도", "오! 삼광빌라", "괴리와 냉소"];

pub const DRAMA_VIDEO_EMBED: &str = "https://www.youtube.com/embed/NXrGvPJIF48";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PressArticle {
    pub source: &'static str,
    pub title: &'static str,
    pub url: &'static str,
}

pub const PRESS_ARTICLES: &[PressArticle] = &[
    PressArticle {
        source: "ABC뉴스",
        title: "기하학적 질서와 본능적 에너지의 조화, 신은영의 추상 세계",
        url: "https://www.abcn.kr/news/articleView.html?idxno=77983",
    },
    PressArticle {
        source: "비즈한국",
        title: "신은영 작가, 희로애락을 붓질에 담다",
        url: "https://www.bizhankook.com/bk/article/27738",
    },
    PressArticle {
        source: "스타데일리뉴스",
        title: "서양화가 신은영, 인사동 아트플러스갤러리 '쉴, 틈' 개인전 개최",
        url: "https://www.stardailynews.co.kr/news/articleView.html?idxno=434025",
    },
    PressArticle {
        source: "데일리한국",
        title: "영산대 공동제작 드라마에 유명 미술작가 대거 참여 '눈길'",
        url: "https://daily.hankooki.com/news/articleView.html?idxno=1122037",
    },
    PressArticle {
        source: "국제뉴스",
        title: "ARTEM(아르템) 갤러리 8일 개관...신은영 작가 개인전 오는 30일까지",
        url: "https://www.gukjenews.com/news/articleView.html?idxno=2444311",
    },
    PressArticle {
        source: "스타뉴스",
        title: "화가 신은영, 서울·부산 초대전..한, 중 작가들 우정전시도",
        url: "http://star.mt.co.kr/stview.php?no=2018071309110081974",
    },
    PressArticle {
        source: "뉴스타운",
        title: "작가 신은영, 25일 한중미술협회전 참가",
        url: "http://www.newstown.co.kr/news/articleView.html?idxno=313159",
    },
    PressArticle {
        source: "스타뉴스",
        title: "차홍규-신은영 2인전, 27~28일 더케이호텔서",
        url: "http://star.mt.co.kr/stview.php?no=2017112409174152392",
    },
];

/// Page sections in navigation order. Each is also the element id.
pub const NAV_SECTIONS: [&str; 6] = ["Home", "About", "Gallery", "Exhibition", "Media", "Contact"];

/// In-page anchor for a navigation label.
#[must_use]
pub fn section_href(label: &str) -> String {
    format!("#{}", label.to_lowercase())
}

/// Wiki link for a drama title.
#[must_use]
pub fn drama_link(title: &str) -> String {
    format!("https://namu.wiki/w/{}", urlencoding::encode(title))
}
