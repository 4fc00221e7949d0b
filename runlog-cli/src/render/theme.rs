use termimad::{
    Alignment, MadSkin,
    crossterm::style::{Attribute, Color},
};

/// Gruvbox-flavoured colours for run output.
pub struct Palette;

impl Palette {
    pub fn skin() -> MadSkin {
        let mut skin = MadSkin::default();

        skin.paragraph.set_fg(Palette::FG);
        skin.bold.set_fg(Palette::ORANGE);
        skin.italic.set_fg(Palette::GREY);

        skin.headers[0].set_fg(Palette::RED);
        skin.headers[0].add_attr(Attribute::Bold);
        skin.headers[0].align = Alignment::Left;

        skin.headers[1].set_fg(Palette::YELLOW);
        skin.headers[1].add_attr(Attribute::Bold);
        skin.headers[1].align = Alignment::Left;

        skin.headers[2].set_fg(Palette::BLUE);

        skin.table.set_fg(Palette::AQUA);
        skin.bullet.set_fg(Palette::GREEN);
        skin.inline_code.set_fg(Palette::AQUA);
        skin.inline_code.set_bg(Palette::BG);

        skin
    }

    pub const BG: Color = Color::Rgb {
        r: 0x28,
        g: 0x28,
        b: 0x28,
    }; // #282828
    pub const FG: Color = Color::Rgb {
        r: 0xEB,
        g: 0xDB,
        b: 0xB2,
    }; // #EBDBB2
    pub const GREY: Color = Color::Rgb {
        r: 0x92,
        g: 0x83,
        b: 0x74,
    }; // #928374
    pub const RED: Color = Color::Rgb {
        r: 0xFB,
        g: 0x49,
        b: 0x34,
    }; // #FB4934
    pub const ORANGE: Color = Color::Rgb {
        r: 0xFE,
        g: 0x80,
        b: 0x19,
    }; // #FE8019
    pub const YELLOW: Color = Color::Rgb {
        r: 0xFA,
        g: 0xBD,
        b: 0x2F,
    }; // #FABD2F
    pub const GREEN: Color = Color::Rgb {
        r: 0xB8,
        g: 0xBB,
        b: 0x26,
    }; // #B8BB26
    pub const AQUA: Color = Color::Rgb {
        r: 0x8E,
        g: 0xC0,
        b: 0x7C,
    }; // #8EC07C
    pub const BLUE: Color = Color::Rgb {
        r: 0x83,
        g: 0xA5,
        b: 0x98,
    }; // #83A598
}
