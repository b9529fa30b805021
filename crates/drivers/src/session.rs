use folio_adapters::InMemoryStaleSet;
use folio_application::{
    ApplicationError, LikeMediaCommand, LikeOutcome, PhotographerProfileQuery, PortfolioService,
};
use folio_domain::{
    sort_media, total_likes, Direction, GalleryNavigator, MediaId, MediaItem, Photographer,
    PhotographerId, SortKey,
};

/// View state for one photographer profile: the loaded media snapshot kept in
/// the active sort order, the lightbox navigator, and the optimistic half of
/// the like path. Counts shown here may run ahead of the store until the next
/// authoritative reload.
pub struct ProfileSession {
    photographer: Photographer,
    medias: Vec<MediaItem>,
    sort_key: SortKey,
    navigator: GalleryNavigator,
    last_like_error: Option<String>,
}

impl ProfileSession {
    pub fn load(
        service: &PortfolioService,
        photographer_id: PhotographerId,
        sort_key: SortKey,
    ) -> Result<Self, ApplicationError> {
        let profile = service.photographer_profile(PhotographerProfileQuery {
            photographer_id,
            sort: Some(sort_key),
        })?;

        Ok(Self {
            photographer: profile.photographer,
            medias: profile.medias,
            sort_key,
            navigator: GalleryNavigator::new(),
            last_like_error: None,
        })
    }

    pub fn photographer(&self) -> &Photographer {
        &self.photographer
    }

    pub fn medias(&self) -> &[MediaItem] {
        &self.medias
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn navigator(&self) -> &GalleryNavigator {
        &self.navigator
    }

    pub fn last_like_error(&self) -> Option<&str> {
        self.last_like_error.as_deref()
    }

    pub fn total_likes(&self) -> i64 {
        total_likes(&self.medias)
    }

    pub fn set_sort(&mut self, sort_key: SortKey) {
        self.sort_key = sort_key;
        self.medias = sort_media(&self.medias, Some(sort_key));
    }

    pub fn open_viewer(&mut self, media_id: MediaId) {
        self.navigator.open(media_id);
    }

    pub fn close_viewer(&mut self) {
        self.navigator.close();
    }

    pub fn navigate(&mut self, direction: Direction) {
        self.navigator.navigate(&self.medias, direction);
    }

    pub fn selected_media(&self) -> Option<&MediaItem> {
        self.navigator.selected_item(&self.medias)
    }

    /// Applies the optimistic +1 before the store call, then issues the
    /// remote increment. A failed outcome leaves the optimistic count in
    /// place — no rollback, no retry — until the next authoritative reload.
    pub fn like(&mut self, service: &PortfolioService, media_id: MediaId) -> LikeOutcome {
        let Some(media) = self.medias.iter_mut().find(|media| media.id == media_id) else {
            return LikeOutcome::Failed(format!(
                "media not in the current gallery: id={}",
                media_id.get()
            ));
        };

        media.likes += 1;
        let photographer_id = media.photographer_id;

        let outcome = service.like_media(LikeMediaCommand {
            media_id,
            photographer_id,
        });
        if let LikeOutcome::Failed(reason) = &outcome {
            self.last_like_error = Some(reason.clone());
        }
        outcome
    }

    /// Refetches when the stale set flags this photographer; authoritative
    /// counts replace the optimistic ones. Returns whether a reload happened.
    pub fn refresh_if_stale(
        &mut self,
        service: &PortfolioService,
        stale: &InMemoryStaleSet,
    ) -> Result<bool, ApplicationError> {
        if !stale.take(self.photographer.id) {
            return Ok(false);
        }
        self.reload(service)?;
        Ok(true)
    }

    pub fn reload(&mut self, service: &PortfolioService) -> Result<(), ApplicationError> {
        let profile = service.photographer_profile(PhotographerProfileQuery {
            photographer_id: self.photographer.id,
            sort: Some(self.sort_key),
        })?;
        self.photographer = profile.photographer;
        // The navigator keeps its selection; it re-resolves by id against the
        // reloaded list on the next step.
        self.medias = profile.medias;
        Ok(())
    }
}
