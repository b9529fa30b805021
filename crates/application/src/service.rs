use std::path::Path;

use folio_domain::{sort_media, total_likes, MediaItem, MediaSource, Photographer};

use crate::{
    ApplicationError, BootstrapCommand, Clock, ContentScanner, LikeMediaCommand,
    ListPhotographersQuery, PhotographerProfileQuery, PortfolioRepository, SeedDataCommand,
    SeedReport, SeedSource, StalenessNotifier, SubmitContactCommand, ThumbnailGenerator,
};

#[derive(Debug, Clone)]
pub struct PhotographerProfile {
    pub photographer: Photographer,
    pub medias: Vec<MediaItem>,
    pub total_likes: i64,
}

/// Result of the remote half of a like. A failure is a value, not an error:
/// the caller keeps its optimistic count either way and decides what to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LikeOutcome {
    Recorded,
    Failed(String),
}

impl LikeOutcome {
    pub fn is_recorded(&self) -> bool {
        matches!(self, Self::Recorded)
    }
}

pub struct PortfolioService {
    repository: Box<dyn PortfolioRepository>,
    seed_source: Box<dyn SeedSource>,
    thumbnails: Box<dyn ThumbnailGenerator>,
    scanner: Box<dyn ContentScanner>,
    staleness: Box<dyn StalenessNotifier>,
    clock: Box<dyn Clock>,
}

impl PortfolioService {
    pub fn new(
        repository: Box<dyn PortfolioRepository>,
        seed_source: Box<dyn SeedSource>,
        thumbnails: Box<dyn ThumbnailGenerator>,
        scanner: Box<dyn ContentScanner>,
        staleness: Box<dyn StalenessNotifier>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            seed_source,
            thumbnails,
            scanner,
            staleness,
            clock,
        }
    }

    pub fn bootstrap(&self, _command: BootstrapCommand) -> Result<(), ApplicationError> {
        self.repository.initialize()
    }

    pub fn seed(&self, command: SeedDataCommand) -> Result<SeedReport, ApplicationError> {
        if command.content_dir.trim().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "content directory must not be empty".to_string(),
            ));
        }
        if command.cache_root.trim().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "cache root must not be empty".to_string(),
            ));
        }

        let photographers = self
            .seed_source
            .load_photographers(&command.photographers_path)?;
        for photographer in &photographers {
            self.repository.upsert_photographer(photographer)?;
        }

        let medias = self.seed_source.load_media(&command.media_path)?;
        for media in &medias {
            self.repository.upsert_media(media)?;
        }

        let inventory = self.scanner.scan_content(&command.content_dir)?;

        let mut report = SeedReport {
            photographers: photographers.len(),
            media_items: medias.len(),
            thumbnails: 0,
            missing_assets: 0,
        };

        for photographer in &photographers {
            if !inventory.contains(&photographer.portrait) {
                report.missing_assets += 1;
            }
        }

        for media in &medias {
            if !inventory.contains(media.source.file()) {
                report.missing_assets += 1;
                continue;
            }
            // Gallery thumbnails exist for images only; video tiles render a
            // placeholder instead of a captured frame.
            if let MediaSource::Image(file) = &media.source {
                let source_path = Path::new(&command.content_dir).join(file);
                self.thumbnails
                    .ensure_thumbnail(&source_path, &command.cache_root, media.id)?;
                report.thumbnails += 1;
            }
        }

        Ok(report)
    }

    pub fn list_photographers(
        &self,
        _query: ListPhotographersQuery,
    ) -> Result<Vec<Photographer>, ApplicationError> {
        self.repository.list_photographers()
    }

    pub fn photographer_profile(
        &self,
        query: PhotographerProfileQuery,
    ) -> Result<PhotographerProfile, ApplicationError> {
        let photographer = self
            .repository
            .find_photographer(query.photographer_id)?
            .ok_or_else(|| {
                ApplicationError::NotFound(format!(
                    "photographer not found for id={}",
                    query.photographer_id.get()
                ))
            })?;

        let medias = self
            .repository
            .list_media_for_photographer(query.photographer_id)?;
        let medias = sort_media(&medias, query.sort);
        let total = total_likes(&medias);

        Ok(PhotographerProfile {
            photographer,
            medias,
            total_likes: total,
        })
    }

    /// Remote half of the like path. The caller applies its optimistic +1
    /// before calling; a `Failed` outcome leaves that count in place (no
    /// rollback, no retry) until the next authoritative read corrects it.
    pub fn like_media(&self, command: LikeMediaCommand) -> LikeOutcome {
        match self.repository.increment_likes(command.media_id) {
            Ok(()) => {
                self.staleness.media_invalidated(command.photographer_id);
                LikeOutcome::Recorded
            }
            Err(error) => LikeOutcome::Failed(error.to_string()),
        }
    }

    pub fn submit_contact(&self, command: SubmitContactCommand) -> Result<(), ApplicationError> {
        command.message.validate()?;

        if self
            .repository
            .find_photographer(command.photographer_id)?
            .is_none()
        {
            return Err(ApplicationError::NotFound(format!(
                "photographer not found for id={}",
                command.photographer_id.get()
            )));
        }

        let now = self.clock.now_timestamp_string();
        self.repository
            .insert_contact_message(command.photographer_id, &command.message, &now)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::{HashMap, HashSet};
    use std::path::{Path, PathBuf};
    use std::rc::Rc;

    use chrono::NaiveDate;
    use folio_domain::{ContactMessage, MediaId, PhotographerId, SortKey};

    use super::*;
    use crate::{ContentInventory, ThumbnailArtifact};

    fn photographer(id: i64, name: &str) -> Photographer {
        Photographer {
            id: PhotographerId::new(id).expect("id"),
            name: name.to_string(),
            city: "Lyon".to_string(),
            country: "France".to_string(),
            tagline: "La lumière avant tout".to_string(),
            price: 400,
            portrait: format!("portrait-{id}.jpg"),
        }
    }

    fn media(id: i64, photographer_id: i64, title: &str, date: &str, likes: i64) -> MediaItem {
        MediaItem {
            id: MediaId::new(id).expect("id"),
            photographer_id: PhotographerId::new(photographer_id).expect("id"),
            title: title.to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("date"),
            likes,
            source: MediaSource::Image(format!("{id}.jpg")),
        }
    }

    #[derive(Default)]
    struct FakeRepository {
        photographers: RefCell<HashMap<i64, Photographer>>,
        medias: RefCell<HashMap<i64, MediaItem>>,
        increments: RefCell<Vec<i64>>,
        contact_messages: RefCell<Vec<(i64, ContactMessage, String)>>,
        fail_increments: Cell<bool>,
    }

    impl PortfolioRepository for FakeRepository {
        fn initialize(&self) -> Result<(), ApplicationError> {
            Ok(())
        }

        fn upsert_photographer(
            &self,
            photographer: &Photographer,
        ) -> Result<(), ApplicationError> {
            self.photographers
                .borrow_mut()
                .insert(photographer.id.get(), photographer.clone());
            Ok(())
        }

        fn upsert_media(&self, media: &MediaItem) -> Result<(), ApplicationError> {
            self.medias.borrow_mut().insert(media.id.get(), media.clone());
            Ok(())
        }

        fn list_photographers(&self) -> Result<Vec<Photographer>, ApplicationError> {
            let mut all: Vec<Photographer> =
                self.photographers.borrow().values().cloned().collect();
            all.sort_by_key(|photographer| photographer.id.get());
            Ok(all)
        }

        fn find_photographer(
            &self,
            photographer_id: PhotographerId,
        ) -> Result<Option<Photographer>, ApplicationError> {
            Ok(self
                .photographers
                .borrow()
                .get(&photographer_id.get())
                .cloned())
        }

        fn list_media_for_photographer(
            &self,
            photographer_id: PhotographerId,
        ) -> Result<Vec<MediaItem>, ApplicationError> {
            let mut medias: Vec<MediaItem> = self
                .medias
                .borrow()
                .values()
                .filter(|media| media.photographer_id == photographer_id)
                .cloned()
                .collect();
            medias.sort_by_key(|media| media.id.get());
            Ok(medias)
        }

        fn increment_likes(&self, media_id: MediaId) -> Result<(), ApplicationError> {
            if self.fail_increments.get() {
                return Err(ApplicationError::Persistence(
                    "store unavailable".to_string(),
                ));
            }
            self.increments.borrow_mut().push(media_id.get());
            match self.medias.borrow_mut().get_mut(&media_id.get()) {
                Some(media) => {
                    media.likes += 1;
                    Ok(())
                }
                None => Err(ApplicationError::NotFound(format!(
                    "media not found for id={}",
                    media_id.get()
                ))),
            }
        }

        fn insert_contact_message(
            &self,
            photographer_id: PhotographerId,
            message: &ContactMessage,
            received_at: &str,
        ) -> Result<(), ApplicationError> {
            self.contact_messages.borrow_mut().push((
                photographer_id.get(),
                message.clone(),
                received_at.to_string(),
            ));
            Ok(())
        }
    }

    struct FakeSeedSource {
        photographers: Vec<Photographer>,
        medias: Vec<MediaItem>,
    }

    impl SeedSource for FakeSeedSource {
        fn load_photographers(
            &self,
            _path: &Path,
        ) -> Result<Vec<Photographer>, ApplicationError> {
            Ok(self.photographers.clone())
        }

        fn load_media(&self, _path: &Path) -> Result<Vec<MediaItem>, ApplicationError> {
            Ok(self.medias.clone())
        }
    }

    #[derive(Default)]
    struct FakeThumbnails {
        generated: RefCell<Vec<i64>>,
    }

    impl ThumbnailGenerator for FakeThumbnails {
        fn ensure_thumbnail(
            &self,
            _source_path: &Path,
            cache_root: &str,
            media_id: MediaId,
        ) -> Result<ThumbnailArtifact, ApplicationError> {
            self.generated.borrow_mut().push(media_id.get());
            Ok(ThumbnailArtifact {
                file_path: format!("{cache_root}/thumbs/{}.jpg", media_id.get()),
                width: 350,
                height: 300,
            })
        }
    }

    struct FakeScanner {
        files: HashSet<String>,
    }

    impl ContentScanner for FakeScanner {
        fn scan_content(&self, _content_dir: &str) -> Result<ContentInventory, ApplicationError> {
            Ok(ContentInventory {
                scanned_files: self.files.len(),
                files: self.files.clone(),
            })
        }
    }

    #[derive(Clone, Default)]
    struct FakeStaleness {
        notified: Rc<RefCell<Vec<i64>>>,
    }

    impl StalenessNotifier for FakeStaleness {
        fn media_invalidated(&self, photographer_id: PhotographerId) {
            self.notified.borrow_mut().push(photographer_id.get());
        }
    }

    struct FakeClock;

    impl Clock for FakeClock {
        fn now_timestamp_string(&self) -> String {
            "2026-08-07T00:00:00Z".to_string()
        }
    }

    fn seed_command() -> SeedDataCommand {
        SeedDataCommand {
            photographers_path: PathBuf::from("photographers.json"),
            media_path: PathBuf::from("media.json"),
            content_dir: "content".to_string(),
            cache_root: "cache".to_string(),
        }
    }

    fn service_with(
        repository: FakeRepository,
        seed: FakeSeedSource,
        staleness: FakeStaleness,
    ) -> PortfolioService {
        let files: HashSet<String> = ["portrait-1.jpg", "1.jpg", "2.jpg", "3.jpg"]
            .into_iter()
            .map(str::to_string)
            .collect();
        PortfolioService::new(
            Box::new(repository),
            Box::new(seed),
            Box::<FakeThumbnails>::default(),
            Box::new(FakeScanner { files }),
            Box::new(staleness),
            Box::new(FakeClock),
        )
    }

    #[test]
    fn seed_upserts_and_reports_missing_assets() {
        let staleness = FakeStaleness::default();
        let mut video = media(3, 1, "Clip", "2024-02-01", 0);
        video.source = MediaSource::Video("3.mp4".to_string());

        let service = service_with(
            FakeRepository::default(),
            FakeSeedSource {
                photographers: vec![photographer(1, "Mia"), photographer(2, "Noah")],
                medias: vec![
                    media(1, 1, "Aube", "2024-01-01", 4),
                    media(2, 1, "Brume", "2024-01-02", 2),
                    video,
                ],
            },
            staleness.clone(),
        );

        let report = service.seed(seed_command()).expect("seed should work");

        assert_eq!(report.photographers, 2);
        assert_eq!(report.media_items, 3);
        // Two image thumbnails; the video file "3.mp4" and Noah's portrait
        // are absent from the content inventory.
        assert_eq!(report.thumbnails, 2);
        assert_eq!(report.missing_assets, 2);

        let photographers = service
            .list_photographers(ListPhotographersQuery)
            .expect("list should work");
        assert_eq!(photographers.len(), 2);
    }

    #[test]
    fn profile_applies_the_requested_sort_and_totals_likes() {
        let staleness = FakeStaleness::default();
        let repository = FakeRepository::default();
        repository
            .upsert_photographer(&photographer(1, "Mia"))
            .expect("upsert");
        repository
            .upsert_media(&media(1, 1, "B", "2024-01-01", 3))
            .expect("upsert");
        repository
            .upsert_media(&media(2, 1, "A", "2024-03-01", 9))
            .expect("upsert");

        let service = service_with(
            repository,
            FakeSeedSource {
                photographers: vec![],
                medias: vec![],
            },
            staleness.clone(),
        );

        let profile = service
            .photographer_profile(PhotographerProfileQuery {
                photographer_id: PhotographerId::new(1).expect("id"),
                sort: Some(SortKey::Popularity),
            })
            .expect("profile should load");

        assert_eq!(profile.photographer.name, "Mia");
        assert_eq!(profile.total_likes, 12);
        let ids: Vec<i64> = profile.medias.iter().map(|media| media.id.get()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn profile_for_unknown_photographer_is_not_found() {
        let staleness = FakeStaleness::default();
        let service = service_with(
            FakeRepository::default(),
            FakeSeedSource {
                photographers: vec![],
                medias: vec![],
            },
            staleness.clone(),
        );

        let result = service.photographer_profile(PhotographerProfileQuery {
            photographer_id: PhotographerId::new(99).expect("id"),
            sort: None,
        });
        assert!(matches!(result, Err(ApplicationError::NotFound(_))));
    }

    #[test]
    fn like_media_increments_and_notifies_once_per_call() {
        let staleness = FakeStaleness::default();
        let repository = FakeRepository::default();
        repository
            .upsert_media(&media(5, 1, "Aube", "2024-01-01", 5))
            .expect("upsert");

        let service = service_with(
            repository,
            FakeSeedSource {
                photographers: vec![],
                medias: vec![],
            },
            staleness.clone(),
        );

        let command = LikeMediaCommand {
            media_id: MediaId::new(5).expect("id"),
            photographer_id: PhotographerId::new(1).expect("id"),
        };

        // Two rapid likes: two independent store increments, two signals.
        assert!(service.like_media(command).is_recorded());
        assert!(service.like_media(command).is_recorded());
        assert_eq!(*staleness.notified.borrow(), vec![1, 1]);
    }

    #[test]
    fn failed_like_returns_failed_and_raises_no_signal() {
        let staleness = FakeStaleness::default();
        let repository = FakeRepository::default();
        repository.fail_increments.set(true);

        let service = service_with(
            repository,
            FakeSeedSource {
                photographers: vec![],
                medias: vec![],
            },
            staleness.clone(),
        );

        let outcome = service.like_media(LikeMediaCommand {
            media_id: MediaId::new(5).expect("id"),
            photographer_id: PhotographerId::new(1).expect("id"),
        });

        assert!(matches!(outcome, LikeOutcome::Failed(_)));
        assert!(staleness.notified.borrow().is_empty());
    }

    #[test]
    fn like_for_unknown_media_is_a_failed_outcome() {
        let staleness = FakeStaleness::default();
        let service = service_with(
            FakeRepository::default(),
            FakeSeedSource {
                photographers: vec![],
                medias: vec![],
            },
            staleness.clone(),
        );

        let outcome = service.like_media(LikeMediaCommand {
            media_id: MediaId::new(404).expect("id"),
            photographer_id: PhotographerId::new(1).expect("id"),
        });
        assert!(matches!(outcome, LikeOutcome::Failed(_)));
    }

    #[test]
    fn submit_contact_validates_then_persists_with_timestamp() {
        let staleness = FakeStaleness::default();
        let repository = FakeRepository::default();
        repository
            .upsert_photographer(&photographer(1, "Mia"))
            .expect("upsert");

        let service = service_with(
            repository,
            FakeSeedSource {
                photographers: vec![],
                medias: vec![],
            },
            staleness.clone(),
        );

        let valid = SubmitContactCommand {
            photographer_id: PhotographerId::new(1).expect("id"),
            message: ContactMessage {
                first_name: "Anna".to_string(),
                last_name: "Martin".to_string(),
                email: "anna@example.org".to_string(),
                message: "Bonjour".to_string(),
            },
        };
        service.submit_contact(valid.clone()).expect("submit");

        let mut invalid = valid;
        invalid.message.email = "not-an-email".to_string();
        assert!(matches!(
            service.submit_contact(invalid),
            Err(ApplicationError::Domain(_))
        ));
    }

    #[test]
    fn submit_contact_to_unknown_photographer_is_not_found() {
        let staleness = FakeStaleness::default();
        let service = service_with(
            FakeRepository::default(),
            FakeSeedSource {
                photographers: vec![],
                medias: vec![],
            },
            staleness.clone(),
        );

        let result = service.submit_contact(SubmitContactCommand {
            photographer_id: PhotographerId::new(12).expect("id"),
            message: ContactMessage {
                first_name: "Anna".to_string(),
                last_name: "Martin".to_string(),
                email: "anna@example.org".to_string(),
                message: "Bonjour".to_string(),
            },
        });
        assert!(matches!(result, Err(ApplicationError::NotFound(_))));
    }
}
