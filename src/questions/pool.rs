use super::Question;

pub(super) static POOL: [Question; 70] = [
    Question {
        id: 1,
        prompt: "Etika profesi dapat diartikan sebagai…",
        choices: [
            "Aturan hukum yang mengikat semua warga negara",
            "Nilai dan norma moral yang mengatur perilaku profesional",
            "Kebiasaan pribadi dalam bekerja",
            "Pedoman kerja berdasarkan pengalaman",
        ],
        answer: 1,
    },
    Question {
        id: 2,
        prompt: "Tujuan utama penerapan etika profesi adalah…",
        choices: [
            "Meningkatkan keuntungan perusahaan",
            "Menjaga citra pribadi",
            "Mengatur hubungan antarindividu secara bebas",
            "Menjaga kepercayaan publik terhadap profesi",
        ],
        answer: 3,
    },
    Question {
        id: 3,
        prompt: "Rekan kerja melakukan pekerjaan yang tidak sesuai standar. Tindakan Anda?",
        choices: [
            "Diam saja, bukan urusan saya",
            "Lapor langsung ke atasan",
            "Bicarakan langsung dengan rekan kerja",
            "Tunggu sampai ada keluhan",
        ],
        answer: 2,
    },
    Question {
        id: 4,
        prompt: "Diminta menggunakan metode akuntansi yang meragukan untuk memperbaiki hasil keuangan. Apa respon Anda?",
        choices: [
            "Ikuti instruksi karena dari atasan",
            "Tolak dan laporkan ke lembaga pengawas",
            "Konsultasi dengan akuntan lain dulu",
            "Coba dulu untuk melihat hasilnya",
        ],
        answer: 1,
    },
    Question {
        id: 5,
        prompt: "Informasi rahasia perusahaan bocor ke kompetitor. Siapa yang bertanggung jawab?",
        choices: [
            "Yang membocorkan saja",
            "Seluruh tim yang tahu informasi tersebut",
            "Hanya pimpinan yang gagal mengawasi",
            "Perusahaan tidak ada tanggung jawab",
        ],
        answer: 0,
    },
    Question {
        id: 6,
        prompt: "Anda menemukan kesalahan dalam data klien. Sebaiknya...",
        choices: [
            "Biarkan saja karena bukan kesalahan saya",
            "Segera beritahu klien dengan dokumentasi lengkap",
            "Tunggu sampai klien menyadarinya sendiri",
            "Perbaiki tanpa memberi tahu klien",
        ],
        answer: 1,
    },
    Question {
        id: 7,
        prompt: "Klien meminta Anda berbohong untuk kepentingannya. Bagaimana respon Anda?",
        choices: [
            "Setuju karena klien adalah prioritas",
            "Tolak dengan tegas dan jelaskan aturan etika",
            "Lakukan dengan syarat tidak ada bukti",
            "Minta biaya tambahan untuk risiko",
        ],
        answer: 1,
    },
    Question {
        id: 8,
        prompt: "Atasan meminta memakai akun media sosial pribadi untuk promosi perusahaan. Apa yang Anda lakukan?",
        choices: [
            "Ikuti karena itu instruksi atasan",
            "Tolak dan gunakan akun resmi perusahaan",
            "Buat akun terpisah untuk promosi",
            "Kerjakan tapi jangan cantumkan nama",
        ],
        answer: 1,
    },
    Question {
        id: 9,
        prompt: "Ditemukan dana hilang dalam audit. Siapa yang harus diberitahu?",
        choices: [
            "Hanya pimpinan puncak",
            "Manajemen, dewan pengawas, dan otoritas yang berwenang",
            "Cukup manajemen saja",
            "Diselesaikan internal tanpa melaporkan",
        ],
        answer: 1,
    },
    Question {
        id: 10,
        prompt: "Proyek selesai melebihi anggaran. Bagaimana melaporkannya?",
        choices: [
            "Sesuaikan laporan agar terlihat sesuai anggaran",
            "Lapor dengan jujur dan jelaskan penyebabnya",
            "Tunda pelaporan hingga ada klienifikasi",
            "Minta maaf tapi jangan detail alasannya",
        ],
        answer: 1,
    },
    Question {
        id: 11,
        prompt: "Deadline proyek sangat ketat namun hasilnya akan berkualitas rendah. Apa yang harus dilakukan?",
        choices: [
            "Berikan hasil asal sesuai jadwal",
            "Komunikasikan risiko dan usulkan solusi",
            "Kerja sampai larut malam tanpa peduli kualitas",
            "Abaikan deadline untuk hasil sempurna",
        ],
        answer: 1,
    },
    Question {
        id: 12,
        prompt: "Temuan audit menunjukkan dugaan korupsi. Langkah pertama yang tepat?",
        choices: [
            "Beritahu tersangka untuk memberikan kesempatan",
            "Lapor ke manajemen dan otoritas yang relevan",
            "Simpan sebagai rahasia tim audit",
            "Tunggu sampai ada bukti lebih kuat",
        ],
        answer: 1,
    },
    Question {
        id: 13,
        prompt: "Klien menggunakan jasa Anda untuk menghindari pajak dengan cara ilegal. Anda harus...",
        choices: [
            "Membantu karena itu bisnis Anda",
            "Menolak dan melaporkan ke otoritas perpajakan",
            "Membantu tapi tidak mencatat dalam laporan",
            "Abaikan dan teruskan pekerjaan",
        ],
        answer: 1,
    },
    Question {
        id: 14,
        prompt: "Reputasi perusahaan terancam karena kesalahan pengguna internal. Siapa yang harus mengkomunikasikan?",
        choices: [
            "Sembunyikan untuk lindungi reputasi",
            "Komunikasikan dengan transparan dan penuh tanggung jawab",
            "Hanya beritahu stakeholder internal",
            "Tunggu media meliput duluan",
        ],
        answer: 1,
    },
    Question {
        id: 15,
        prompt: "Biaya operasional meningkat namun tidak bisa dipangkas lagi. Apa yang harus dilaporkan?",
        choices: [
            "Lapor biaya lebih rendah dari kenyataan",
            "Lapor dengan jujur dan ajukan rencana optimasi",
            "Tunda pelaporan selama beberapa bulan",
            "Bagikan biaya ke berbagai kategori agar tidak terlihat",
        ],
        answer: 1,
    },
    Question {
        id: 16,
        prompt: "Seorang anggota tim tidur saat bekerja. Tindakan yang tepat?",
        choices: [
            "Diabaikan saja",
            "Peringatkan secara privat dan cari tahu penyebabnya",
            "Laporkan langsung ke kepala bagian",
            "Potong gajinya tanpa notifikasi",
        ],
        answer: 1,
    },
    Question {
        id: 17,
        prompt: "Menemukan kelemahan sistem keamanan data. Siapa yang harus Anda laporkan?",
        choices: [
            "Jangan lapor agar tidak merepotkan",
            "Lapor ke tim IT dan manajemen dengan segera",
            "Ceritakan ke teman sebelum lapor resmi",
            "Coba exploit untuk buktikan risikonya",
        ],
        answer: 1,
    },
    Question {
        id: 18,
        prompt: "Vendor meminta komisi khusus untuk Anda agar dipilih. Bagaimana respon Anda?",
        choices: [
            "Terima karena benefit pribadi",
            "Tolak dan laporkan ke manajemen",
            "Terima tapi tidak ungkap ke manajemen",
            "Minta lebih banyak lagi",
        ],
        answer: 1,
    },
    Question {
        id: 19,
        prompt: "Dokumen penting hilang dan Anda yang terakhir mengaksesnya. Apa yang dilakukan?",
        choices: [
            "Sembunyikan agar tidak terlihat bersalah",
            "Laporkan dengan jujur dan bantu investigasi",
            "Cari siapa yang sebenarnya bertanggung jawab",
            "Buat dokumen baru yang sama",
        ],
        answer: 1,
    },
    Question {
        id: 20,
        prompt: "Klien meminta laporan audit disesuaikan agar terlihat lebih baik. Respons Anda?",
        choices: [
            "Setuju karena klien membayar",
            "Tolak karena violasi standar auditing",
            "Lakukan dengan syarat tidak ada bukti",
            "Diskusikan cara yang etis",
        ],
        answer: 1,
    },
    Question {
        id: 21,
        prompt: "Perusahaan klien adalah milik keluarga dekat Anda. Bagaimana bertindak?",
        choices: [
            "Tangani seperti klien biasa",
            "Disklosur hubungan dan tunjukkan independensi",
            "Hanya handle pekerjaan administratif",
            "Minta kompensasi lebih karena ada hubungan",
        ],
        answer: 1,
    },
    Question {
        id: 22,
        prompt: "Ditawari saham klien dengan harga spesial. Apakah Anda harus menerima?",
        choices: [
            "Terima karena menguntungkan",
            "Tolak untuk menjaga independensi",
            "Terima tapi jangan lapor",
            "Tanyakan ke klien apakah boleh",
        ],
        answer: 1,
    },
    Question {
        id: 23,
        prompt: "Teman dekat bekerja di perusahaan kompetitor klien Anda. Apa yang dilakukan?",
        choices: [
            "Terus seperti biasa, bukan masalah",
            "Disklosur hubungan ke manajemen",
            "Kurangi kontak dengan teman tersebut",
            "Minta teman pindah ke perusahaan Anda",
        ],
        answer: 1,
    },
    Question {
        id: 24,
        prompt: "Audit menemukan kesalahan yang jika dipublikasi akan merugikan rekan bisnis Anda. Tindakan?",
        choices: [
            "Sembunyikan untuk lindungi rekan",
            "Laporkan dengan objektivitas penuh",
            "Laporkan tapi dengan bahasa yang halus",
            "Tanyakan rekan apa yang seharusnya dilakukan",
        ],
        answer: 1,
    },
    Question {
        id: 25,
        prompt: "Diminta mengaudit perusahaan tempatmu bekerja dulu. Bisakah menerima penugasan ini?",
        choices: [
            "Bisa saja, sudah resign kok",
            "Tidak bisa karena masih ada hubungan",
            "Bisa tapi dengan pengawasan ketat",
            "Bisa dengan persyaratan tidak ada pembelaan",
        ],
        answer: 1,
    },
    Question {
        id: 26,
        prompt: "Klien akan memberi kontrak besar jika Anda tidak melaporkan celah pajak. Pilihan Anda?",
        choices: [
            "Setuju karena uang penting",
            "Tolak dan laporkan sesuai standar etika",
            "Lakukan dengan imbalan harga lebih tinggi",
            "Beri waktu klien untuk perbaiki sendiri",
        ],
        answer: 1,
    },
    Question {
        id: 27,
        prompt: "Memiliki investasi di perusahaan yang akan Anda audit. Tindakan yang tepat?",
        choices: [
            "Lakukan audit seperti biasa",
            "Jual investasi atau tolak penugasan",
            "Jual investasi setelah audit selesai",
            "Tidak perlu laporkan ke manajemen",
        ],
        answer: 1,
    },
    Question {
        id: 28,
        prompt: "Keluarga menggunakan jasa profesional Anda dengan harga khusus. Etika ini?",
        choices: [
            "Tidak masalah, murni transaksi bisnis",
            "Perlu transparansi dan dokumentasi jelas",
            "Boleh tapi jangan beri diskon terlalu besar",
            "Berikan gratis karena keluarga sendiri",
        ],
        answer: 1,
    },
    Question {
        id: 29,
        prompt: "Audit menemukan klien melanggar hukum. Siapa yang diberitahu terlebih dahulu?",
        choices: [
            "Klien saja",
            "Manajemen klien dan otoritas yang berwenang",
            "Hanya otoritas, tidak perlu tahu klien",
            "Tim audit saja",
        ],
        answer: 1,
    },
    Question {
        id: 30,
        prompt: "Ditawari pekerjaan di klien dengan gaji jauh lebih tinggi. Bagaimana prosedurnya?",
        choices: [
            "Langsung terima dan resign",
            "Beritahu manajemen dan tunggu waktu transisi yang wajar",
            "Terima tapi teruskan pekerjaan audit dulu",
            "Minta kompensasi dari perusahaan saat ini",
        ],
        answer: 1,
    },
    Question {
        id: 31,
        prompt: "Diminta membocorkan informasi klien ke pesaing. Apa respons Anda?",
        choices: [
            "Bisa jika dibayar",
            "Tolak dan laporkan upaya ini",
            "Lakukan tapi sangat rahasia",
            "Minta persetujuan klien terlebih dahulu",
        ],
        answer: 1,
    },
    Question {
        id: 32,
        prompt: "Klien meminta tidak mengungkap data tertentu kepada dewan pengawas. Bagaimana?",
        choices: [
            "Ikuti permintaan klien",
            "Ungkap karena dewan pengawas perlu tahu semua",
            "Diskusikan dengan klien pentingnya transparansi",
            "Minta klien izin tertulis untuk tidak ungkap",
        ],
        answer: 1,
    },
    Question {
        id: 33,
        prompt: "Media meminta informasi klien Anda. Apa yang direspons?",
        choices: [
            "Berikan informasi untuk publisitas",
            "Tolak dan arahkan ke klien atau hukum perusahaan",
            "Berikan tapi dengan nama samaran",
            "Tanyakan klien boleh atau tidak",
        ],
        answer: 1,
    },
    Question {
        id: 34,
        prompt: "Menemukan bahwa klien lain adalah kompetitor klien Anda saat ini. Tindakan?",
        choices: [
            "Abaikan karena bukan urusan saya",
            "Disklosur konflik potensi ke kedua klien",
            "Fokus pada profesionalisme di setiap klien",
            "Beritahu klien pertama tentang klien kedua",
        ],
        answer: 1,
    },
    Question {
        id: 35,
        prompt: "Negosiasi gaji dengan klien untuk pekerjaan tambahan. Apakah etis?",
        choices: [
            "Tidak etis, berbeda dua pihak",
            "Etis jika didokumentasikan dengan jelas",
            "Etis tapi disembunyikan dari manajemen",
            "Tidak boleh sama sekali",
        ],
        answer: 1,
    },
    Question {
        id: 36,
        prompt: "Klien meminta hasil audit disembunyikan dari lembaga regulasi. Tindakan Anda?",
        choices: [
            "Setuju karena klien bayar",
            "Tolak dan laporkan audit sesuai aturan",
            "Lakukan dengan syarat dibayar lebih",
            "Tunggu ada masalah baru sebelum lapor",
        ],
        answer: 1,
    },
    Question {
        id: 37,
        prompt: "Catatan audit menunjukkan data sensitif klien. Bagaimana menyimpannya?",
        choices: [
            "Simpan di rumah saja",
            "Simpan dengan keamanan tinggi sesuai standar",
            "Tidak perlu simpan, hanya ingat saja",
            "Bagikan ke tim untuk backup",
        ],
        answer: 1,
    },
    Question {
        id: 38,
        prompt: "Dipercaya klien untuk rahasiakan identitas pihak lain dalam laporan. Boleh?",
        choices: [
            "Boleh jika klien minta",
            "Tidak boleh, harus jujur dalam laporan",
            "Boleh tapi dengan catatan khusus",
            "Boleh tapi dokumentasikan secara tersembunyi",
        ],
        answer: 1,
    },
    Question {
        id: 39,
        prompt: "Kolega membagikan informasi rahasia klien di forum tertutup. Apa yang dilakukan?",
        choices: [
            "Biarkan saja",
            "Tegur kolega dan laporkan ke manajemen",
            "Lakukan hal yang sama untuk seimbang",
            "Tanyakan dulu alasan kolega membagikan",
        ],
        answer: 1,
    },
    Question {
        id: 40,
        prompt: "Diminta menulis laporan yang meninggalkan detail penting untuk kepentingan klien. Tindakan?",
        choices: [
            "Tulis sesuai permintaan",
            "Tulis lengkap dan jujur sesuai standar",
            "Tulis tapi dengan catatan kaki yang ambigu",
            "Tolak menulis laporan",
        ],
        answer: 1,
    },
    Question {
        id: 41,
        prompt: "Diberikan proyek di bidang yang belum pernah Anda tangani. Bagaimana?",
        choices: [
            "Langsung terima karena perlu pengalaman",
            "Diskusikan dengan atasan dan ambil pelatihan jika perlu",
            "Terima tapi cari bantuan diam-diam",
            "Tolak dan usulkan kolega lain",
        ],
        answer: 1,
    },
    Question {
        id: 42,
        prompt: "Klien meminta Anda bekerja tanpa standar industri untuk hemat biaya. Respons?",
        choices: [
            "Setuju karena bisa hemat",
            "Jelaskan risiko dan tegak pada standar",
            "Lakukan dengan perjanjian tanpa jaminan kualitas",
            "Coba setengah standar dulu",
        ],
        answer: 1,
    },
    Question {
        id: 43,
        prompt: "Menemukan diri Anda kurang kompeten untuk suatu tugas. Apa yang dilakukan?",
        choices: [
            "Lanjutkan saja dan belajar sambil bekerja",
            "Diskusikan dengan atasan dan cari solusi",
            "Lapor ketika masalah timbul",
            "Minta bantuan klien",
        ],
        answer: 1,
    },
    Question {
        id: 44,
        prompt: "Mengalami burnout namun tetap memiliki pekerjaan pending. Bagaimana mengatasi?",
        choices: [
            "Lanjutkan bekerja meski kualitas menurun",
            "Beritahu atasan dan cari solusi seimbang",
            "Ambil cuti tanpa pemberitahuan",
            "Selesaikan dengan cepat meski tidak sempurna",
        ],
        answer: 1,
    },
    Question {
        id: 45,
        prompt: "Teknologi baru mengubah cara kerja industri Anda. Tindakan Anda?",
        choices: [
            "Abaikan dan teruskan cara lama",
            "Pelajari dan adopsi untuk tetap kompeten",
            "Tunggu sampai klien minta dulu",
            "Minta perusahaan yang upgrade sistem",
        ],
        answer: 1,
    },
    Question {
        id: 46,
        prompt: "Diminta melakukan pekerjaan di area yang ada konflik kepentingan pribadi. Apakah boleh?",
        choices: [
            "Boleh jika tidak ada orang lain",
            "Tidak boleh untuk menjaga integritas",
            "Boleh tapi harus sangat hati-hati",
            "Boleh dengan pengungkapan penuh",
        ],
        answer: 1,
    },
    Question {
        id: 47,
        prompt: "Klien meminta Anda bekerja dengan jam yang tidak standar dan berbahaya. Tindakan?",
        choices: [
            "Setuju karena klien membayar",
            "Tolak dan usulkan jadwal yang aman",
            "Lakukan dengan syarat gaji overtime besar",
            "Setuju tapi kurangi komitmen klien lain",
        ],
        answer: 1,
    },
    Question {
        id: 48,
        prompt: "Menerima tawaran pelatihan gratis di bidang yang relevan. Apakah perlu konfirmasi atasan?",
        choices: [
            "Tidak perlu, itu untuk pengembangan diri",
            "Sebaiknya beritahu atasan agar saling support",
            "Terima tapi sembunyikan dari atasan",
            "Minta atasan yang membayar pelatihan",
        ],
        answer: 1,
    },
    Question {
        id: 49,
        prompt: "Ditemukan bahwa Anda membuat kesalahan teknis dalam pekerjaan sebelumnya. Langkah?",
        choices: [
            "Sembunyikan agar tidak disorot",
            "Segera beritahu atasan dan klien, perbaiki",
            "Tunggu klien menyadarinya",
            "Perbaiki sendiri tanpa lapor",
        ],
        answer: 1,
    },
    Question {
        id: 50,
        prompt: "Klien minta sertifikasi Anda untuk layanan yang belum Anda sertifikasi. Respons?",
        choices: [
            "Berikan sertifikat palsu",
            "Tolak dan jelaskan standar sertifikasi",
            "Berikan dengan syarat rahasia",
            "Coba dulu sebelum sertifikasi resmi",
        ],
        answer: 1,
    },
    Question {
        id: 51,
        prompt: "Kesalahan Anda menyebabkan kerugian klien. Bagaimana menghadapinya?",
        choices: [
            "Sembunyikan agar tidak tahu",
            "Akui, minta maaf, dan tanggung jawab",
            "Alihkan kesalahan ke orang lain",
            "Tutup dengan cerita lain yang mengalihkan",
        ],
        answer: 1,
    },
    Question {
        id: 52,
        prompt: "Menemukan biaya tidak masuk dalam penawaran awal kepada klien. Tindakan?",
        choices: [
            "Sembunyikan dan tagih saat invoice",
            "Komunikasikan perubahan dengan jelas dan jujur",
            "Serap biaya sendiri agar klien senang",
            "Tagih diam-diam setelah pekerjaan selesai",
        ],
        answer: 1,
    },
    Question {
        id: 53,
        prompt: "Klien meminta Anda memberikan referensi palsu dari klien terdahulu. Apakah boleh?",
        choices: [
            "Boleh untuk bantu klien",
            "Tidak boleh karena melanggar integritas",
            "Boleh tapi tidak dengan detail real",
            "Boleh dengan persetujuan klien terdahulu",
        ],
        answer: 1,
    },
    Question {
        id: 54,
        prompt: "Atasan meminta menutupi kesalahan sistemik perusahaan. Respons?",
        choices: [
            "Ikuti instruksi atasan",
            "Tolak dan laporkan ke level lebih tinggi atau otoritas",
            "Lakukan tapi dokumentasikan untuk perlindungan",
            "Cari cara untuk menutupi secara kreativ",
        ],
        answer: 1,
    },
    Question {
        id: 55,
        prompt: "Menemukan bahwa kompetitor melakukan tindakan tidak etis. Tindakan?",
        choices: [
            "Balas dengan cara serupa",
            "Laporkan ke otoritas yang relevan jika terbukti",
            "Abaikan karena bukan bidang saya",
            "Beritahu klien untuk menggunakan layanan saya",
        ],
        answer: 1,
    },
    Question {
        id: 56,
        prompt: "Diminta meningkatkan angka di laporan tanpa dasar faktual. Bagaimana?",
        choices: [
            "Setuju karena meningkatkan penjualan",
            "Tolak dan rapor data yang akurat",
            "Lakukan dengan catatan khusus",
            "Tanyakan berapa banyak harus dinaikkan",
        ],
        answer: 1,
    },
    Question {
        id: 57,
        prompt: "Pengalaman Anda kurang dari yang Anda klaim di CV. Bagaimana memperbaikinya?",
        choices: [
            "Dibiarkan saja, semua orang pernah bohong",
            "Koreksi secara transparan ke perusahaan",
            "Tutupi dengan memberikan hasil lebih baik",
            "Perbaiki CV terakhir sebelum background check",
        ],
        answer: 1,
    },
    Question {
        id: 58,
        prompt: "Klien menggunakan produk Anda untuk tujuan ilegal. Bagaimana?",
        choices: [
            "Teruskan karena pembayaran sudah diterima",
            "Hentikan layanan dan laporkan ke otoritas",
            "Teruskan tapi jangan tanyakan kepada siapa",
            "Minta klien untuk private",
        ],
        answer: 1,
    },
    Question {
        id: 59,
        prompt: "Menemukan data palsu dalam database klien yang mereka kirim sendiri. Tindakan?",
        choices: [
            "Gunakan data apa adanya",
            "Tanyakan dan verifikasi sebelum digunakan",
            "Laporkan langsung ke otoritas",
            "Jangan tanyakan, biarkan klien tanggung jawab",
        ],
        answer: 1,
    },
    Question {
        id: 60,
        prompt: "Diberikan bonus atas dasar pencapaian target yang sebenarnya tidak realistis. Tindakan?",
        choices: [
            "Ambil bonus tanpa pertanyaan",
            "Diskusikan dengan atasan tentang realism target",
            "Ambil tapi rasakan bersalah",
            "Tolak bonus jika tidak realistis",
        ],
        answer: 1,
    },
    Question {
        id: 61,
        prompt: "Proyek Anda akan berdampak negatif pada lingkungan. Apa yang dilakukan?",
        choices: [
            "Lanjutkan, bukan tanggung jawab saya",
            "Identifikasi risiko dan usulkan mitigasi",
            "Hentikan proyek total",
            "Lanjutkan tapi dengan pengurangan dampak",
        ],
        answer: 1,
    },
    Question {
        id: 62,
        prompt: "Klien meminta mengurangi standar keamanan untuk hemat biaya. Respons?",
        choices: [
            "Setuju karena klien prioritas",
            "Tolak dan jelaskan risiko keamanan",
            "Kurangi sedikit saja",
            "Lakukan dengan izin tertulis dari klien",
        ],
        answer: 1,
    },
    Question {
        id: 63,
        prompt: "Layanan Anda akan mempengaruhi ribuan orang secara negatif. Tindakan?",
        choices: [
            "Lanjutkan karena sudah kontrak",
            "Assess risiko dan cari solusi mitigasi",
            "Hentikan seluruh proyek",
            "Lanjutkan tapi informasikan risiko",
        ],
        answer: 1,
    },
    Question {
        id: 64,
        prompt: "Temuan menunjukkan klien merugikan konsumen secara sistematis. Anda harus...",
        choices: [
            "Diam karena hubungan baik dengan klien",
            "Laporkan ke otoritas yang berwenang",
            "Beritahu klien untuk perbaiki sendiri",
            "Konsultasikan dengan lawyer klien",
        ],
        answer: 1,
    },
    Question {
        id: 65,
        prompt: "Program Anda berdampak pada pengurangan lapangan kerja karyawan. Etika tindakan?",
        choices: [
            "Tidak masalah, efisiensi adalah tujuan",
            "Assess dampak sosial dan cari solusi transisi",
            "Jangan implementasikan program",
            "Implementasikan tapi bantu pelatihan ulang",
        ],
        answer: 1,
    },
    Question {
        id: 66,
        prompt: "Klien meminta strategi yang memanfaatkan celah hukum yang merugikan publik. Tindakan?",
        choices: [
            "Setuju karena legal secara teknis",
            "Tolak karena merugikan publik dan integritas",
            "Lakukan dengan syarat tidak ada bukti",
            "Lakukan tapi dengan dokumentasi tersembunyi",
        ],
        answer: 1,
    },
    Question {
        id: 67,
        prompt: "Menemukan klien mengeksploitasi buruh anak dalam supply chain. Tindakan?",
        choices: [
            "Abaikan karena di negara lain",
            "Laporkan ke otoritas dan stop layanan",
            "Beritahu klien untuk stop praktik",
            "Teruskan tapi dengan catatan moral",
        ],
        answer: 1,
    },
    Question {
        id: 68,
        prompt: "Data pribadi konsumen akan terbuka dalam layanan baru. Bagaimana?",
        choices: [
            "Lanjutkan karena sudah oke secara hukum",
            "Assess privasi dan implementasikan proteksi tinggi",
            "Jangan buka data konsumen",
            "Buka tapi dengan izin tertulis konsumen",
        ],
        answer: 1,
    },
    Question {
        id: 69,
        prompt: "Produk Anda akan mempengaruhi kesehatan publik. Tindakan yang tepat?",
        choices: [
            "Teruskan selama ada persetujuan hukum",
            "Conduct riset dampak kesehatan mendalam",
            "Jangan luncurkan produk",
            "Luncurkan dengan warning tapi jangan promosi",
        ],
        answer: 1,
    },
    Question {
        id: 70,
        prompt: "Klien meminta menyembunyikan informasi kesehatan dari regulasi. Respons Anda?",
        choices: [
            "Setuju untuk loyalitas klien",
            "Tolak karena melindungi publik adalah prioritas",
            "Sembunyikan sampai waktu tertentu",
            "Laporkan hanya jika ada bukti kuat",
        ],
        answer: 1,
    },
];
