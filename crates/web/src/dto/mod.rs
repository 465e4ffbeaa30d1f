pub use panel::{
    ArgDto, BannerDto, ChainDto, CounterDto, DestinationPanelDto, EventDto, LastIncrementerDto, SourcePanelDto, TriggerCardDto,
    WalletDto,
};

mod panel;
